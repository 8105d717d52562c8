/// Hepburn romaji -> katakana, for words like `sushi` that no dictionary knows.
///
/// Only words that spell romaji from start to finish are converted; a word
/// with any leftover letters yields `None`.
pub struct RomajiFallback;

// Matched longest first: three, two, then one letter.
#[rustfmt::skip]
const SYLLABLES: &[(&str, &str)] = &[
    ("a", "ア"), ("i", "イ"), ("u", "ウ"), ("e", "エ"), ("o", "オ"),
    ("ka", "カ"), ("ki", "キ"), ("ku", "ク"), ("ke", "ケ"), ("ko", "コ"),
    ("kya", "キャ"), ("kyu", "キュ"), ("kyo", "キョ"),
    ("sa", "サ"), ("shi", "シ"), ("si", "シ"), ("su", "ス"), ("se", "セ"), ("so", "ソ"),
    ("sha", "シャ"), ("shu", "シュ"), ("sho", "ショ"),
    ("ta", "タ"), ("chi", "チ"), ("ti", "チ"), ("tsu", "ツ"), ("tu", "ツ"), ("te", "テ"), ("to", "ト"),
    ("cha", "チャ"), ("chu", "チュ"), ("cho", "チョ"),
    ("na", "ナ"), ("ni", "ニ"), ("nu", "ヌ"), ("ne", "ネ"), ("no", "ノ"),
    ("nya", "ニャ"), ("nyu", "ニュ"), ("nyo", "ニョ"),
    ("ha", "ハ"), ("hi", "ヒ"), ("fu", "フ"), ("hu", "フ"), ("he", "ヘ"), ("ho", "ホ"),
    ("hya", "ヒャ"), ("hyu", "ヒュ"), ("hyo", "ヒョ"),
    ("ma", "マ"), ("mi", "ミ"), ("mu", "ム"), ("me", "メ"), ("mo", "モ"),
    ("mya", "ミャ"), ("myu", "ミュ"), ("myo", "ミョ"),
    ("ya", "ヤ"), ("yu", "ユ"), ("yo", "ヨ"),
    ("ra", "ラ"), ("ri", "リ"), ("ru", "ル"), ("re", "レ"), ("ro", "ロ"),
    ("rya", "リャ"), ("ryu", "リュ"), ("ryo", "リョ"),
    ("wa", "ワ"), ("wo", "ヲ"),
    ("ga", "ガ"), ("gi", "ギ"), ("gu", "グ"), ("ge", "ゲ"), ("go", "ゴ"),
    ("gya", "ギャ"), ("gyu", "ギュ"), ("gyo", "ギョ"),
    ("za", "ザ"), ("ji", "ジ"), ("zi", "ジ"), ("zu", "ズ"), ("ze", "ゼ"), ("zo", "ゾ"),
    ("ja", "ジャ"), ("ju", "ジュ"), ("jo", "ジョ"),
    ("da", "ダ"), ("de", "デ"), ("do", "ド"),
    ("ba", "バ"), ("bi", "ビ"), ("bu", "ブ"), ("be", "ベ"), ("bo", "ボ"),
    ("bya", "ビャ"), ("byu", "ビュ"), ("byo", "ビョ"),
    ("pa", "パ"), ("pi", "ピ"), ("pu", "プ"), ("pe", "ペ"), ("po", "ポ"),
    ("pya", "ピャ"), ("pyu", "ピュ"), ("pyo", "ピョ"),
];

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'i' | b'u' | b'e' | b'o')
}

fn syllable(s: &str) -> Option<&'static str> {
    SYLLABLES
        .iter()
        .find(|(romaji, _)| *romaji == s)
        .map(|(_, kana)| *kana)
}

impl RomajiFallback {
    pub fn new() -> Self {
        Self
    }

    /// Convert a lower-case word, `None` unless every letter is consumed
    pub fn to_katakana(&self, word: &str) -> Option<String> {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }

        let bytes = word.as_bytes();
        let mut out = String::new();
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i];
            let next = bytes.get(i + 1).copied();

            // Syllabic n: before a consonant other than y, or at the end
            if c == b'n' && next.is_none_or(|n| !is_vowel(n) && n != b'y') {
                out.push('ン');
                i += 1;
                continue;
            }

            // Hepburn m before labials (tempura, shimbun)
            if c == b'm' && matches!(next, Some(b'b' | b'm' | b'p')) {
                out.push('ン');
                i += 1;
                continue;
            }

            // Doubled consonant (kitte, matcha)
            if !is_vowel(c) && (next == Some(c) || (c == b't' && next == Some(b'c'))) {
                out.push('ッ');
                i += 1;
                continue;
            }

            let kana = (1..=3)
                .rev()
                .filter(|len| i + len <= bytes.len())
                .find_map(|len| syllable(&word[i..i + len]).map(|kana| (len, kana)));

            let (len, kana) = kana?;
            out.push_str(kana);
            i += len;
        }

        Some(out)
    }
}

impl Default for RomajiFallback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_romaji_words() {
        let r = RomajiFallback::new();
        assert_eq!(r.to_katakana("sushi").as_deref(), Some("スシ"));
        assert_eq!(r.to_katakana("tempura").as_deref(), Some("テンプラ"));
        assert_eq!(r.to_katakana("kyoto").as_deref(), Some("キョト"));
        assert_eq!(r.to_katakana("kitte").as_deref(), Some("キッテ"));
        assert_eq!(r.to_katakana("matcha").as_deref(), Some("マッチャ"));
        assert_eq!(r.to_katakana("konnichiwa").as_deref(), Some("コンニチワ"));
        assert_eq!(r.to_katakana("kenichi").as_deref(), Some("ケニチ"));
    }

    #[test]
    fn rejects_partial_conversions() {
        let r = RomajiFallback::new();
        assert_eq!(r.to_katakana("hello"), None);
        assert_eq!(r.to_katakana("dog"), None);
        assert_eq!(r.to_katakana("Sushi"), None);
        assert_eq!(r.to_katakana("don't"), None);
        assert_eq!(r.to_katakana(""), None);
    }
}
