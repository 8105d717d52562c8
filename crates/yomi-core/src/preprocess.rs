use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default input preprocessor
    fn process(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), folds full-width Latin to ASCII
        let text: String = text.nfkc().collect();

        // Typographic apostrophes pasted from word processors
        text.replace(['\u{2018}', '\u{2019}'], "'").replace('\r', "")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Leaves text untouched apart from carriage returns
pub struct PassthroughPreprocessor;
impl Preprocessor for PassthroughPreprocessor {
    fn process(&self, text: &str) -> String {
        text.replace('\r', "")
    }
}

/// Convert half-width kana in a reading to full-width.
///
/// NFKC composes half-width voicing marks (`ｶﾞ` -> `ガ`), and is idempotent.
pub fn to_full_width(reading: &str) -> String {
    reading.nfkc().collect()
}
