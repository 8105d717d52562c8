use yomi_core::language::{InflectionCandidate, Inflector};

/// Reading appended to an `-es` stem (boxes)
pub const ES_READING: &str = "イズ";
/// Reading appended to a `t` stem (cats)
pub const TS_READING: &str = "ツ";
/// Reading appended to a `k`/`p`/`f` stem (books)
pub const VOICELESS_S_READING: &str = "ス";
/// Reading appended to any other stem (dogs)
pub const VOICED_S_READING: &str = "ズ";

/// Plural and third-person `-s`/`-es` stripping.
///
/// Yields at most one level of stems: the caller looks them up directly and
/// never feeds them back through the inflector.
///
/// An `-es` word yields two candidates, the `es` stem and then the plain `s`
/// stem, so `cakes` still reads as `cake` + ズ. Taking only the `es` stem
/// would leave it unresolved.
pub struct PluralInflector;

impl PluralInflector {
    pub fn new() -> Self {
        Self
    }

    fn s_suffix_reading(stem: &str) -> &'static str {
        match stem.chars().last() {
            Some('t') => TS_READING,
            Some('k' | 'p' | 'f') => VOICELESS_S_READING,
            _ => VOICED_S_READING,
        }
    }
}

impl Default for PluralInflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector for PluralInflector {
    fn stems(&self, word: &str) -> Vec<InflectionCandidate> {
        let mut results = Vec::new();

        let len = word.chars().count();
        let Some(s_stem) = word.strip_suffix('s').filter(|_| len > 1) else {
            return results;
        };

        // boxes -> box, tried before boxe
        if len > 2 {
            if let Some(es_stem) = word.strip_suffix("es") {
                results.push(InflectionCandidate {
                    stem: es_stem.to_string(),
                    suffix_reading: ES_READING.to_string(),
                    rule: "-es",
                });
            }
        }

        results.push(InflectionCandidate {
            stem: s_stem.to_string(),
            suffix_reading: Self::s_suffix_reading(s_stem).to_string(),
            rule: "-s",
        });

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems(word: &str) -> Vec<(String, String)> {
        PluralInflector::new()
            .stems(word)
            .into_iter()
            .map(|c| (c.stem, c.suffix_reading))
            .collect()
    }

    #[test]
    fn voicing_follows_stem_ending() {
        assert_eq!(stems("cats"), [("cat".to_string(), "ツ".to_string())]);
        assert_eq!(stems("books"), [("book".to_string(), "ス".to_string())]);
        assert_eq!(stems("cups"), [("cup".to_string(), "ス".to_string())]);
        assert_eq!(stems("chefs"), [("chef".to_string(), "ス".to_string())]);
        assert_eq!(stems("dogs"), [("dog".to_string(), "ズ".to_string())]);
    }

    #[test]
    fn es_stem_comes_first() {
        assert_eq!(
            stems("boxes"),
            [
                ("box".to_string(), "イズ".to_string()),
                ("boxe".to_string(), "ズ".to_string()),
            ]
        );
    }

    #[test]
    fn short_or_non_plural_words_have_no_stems() {
        assert!(stems("s").is_empty());
        assert!(stems("dog").is_empty());
        assert!(stems("").is_empty());
        // two letters: only the plain -s rule applies
        assert_eq!(stems("es"), [("e".to_string(), "ズ".to_string())]);
    }
}
