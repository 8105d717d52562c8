use std::fmt;
use std::ops::Range;

/// Text processing and reading lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Normalize raw input before it is split into lines
    fn normalize(&self, text: &str) -> String;

    /// Break one line into tokens
    fn tokenize(&self, line: &str) -> Vec<Token>;

    /// Find a reading for a cleaned word, `None` when nothing matches
    fn resolve(&self, word: &str) -> Option<Resolution>;
}

/// Optional trait for languages with inflected forms
pub trait Inflector: Send + Sync {
    /// Candidate stems for an inflected word, in the order they should be tried
    fn stems(&self, word: &str) -> Vec<InflectionCandidate>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    /// Apostrophe-led suffix such as `'s` or `'ll`
    ContractionFragment,
    PunctuationOrOther,
}

impl TokenKind {
    /// Whether tokens of this kind are sent to reading resolution
    pub fn is_resolvable(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::ContractionFragment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text as it appeared in the line
    pub surface: String,
    pub kind: TokenKind,
    /// Byte range of the cleaned word inside `surface`
    pub word: Range<usize>,
}

impl Token {
    /// Token whose cleaned word is the whole surface
    pub fn new(surface: impl Into<String>, kind: TokenKind) -> Self {
        let surface = surface.into();
        let word = 0..surface.len();
        Self {
            surface,
            kind,
            word,
        }
    }

    /// Cleaned word used for lookup
    pub fn word(&self) -> &str {
        &self.surface[self.word.clone()]
    }

    /// Punctuation stripped from the front of the surface
    pub fn leading(&self) -> &str {
        &self.surface[..self.word.start]
    }

    /// Punctuation stripped from the back of the surface
    pub fn trailing(&self) -> &str {
        &self.surface[self.word.end..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionCandidate {
    pub stem: String,
    /// Reading appended to the stem's reading
    pub suffix_reading: String,
    pub rule: &'static str,
}

/// Where a reading came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionPath {
    /// Direct hit in a named dictionary tier
    Direct { source: String },
    /// Stem hit after suffix stripping
    Inflected {
        stem: String,
        source: String,
        rule: &'static str,
    },
    /// Spelled out from romaji
    Romaji,
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionPath::Direct { source } => write!(f, "{source}"),
            ResolutionPath::Inflected { stem, source, rule } => {
                write!(f, "{rule}: {stem} ({source})")
            }
            ResolutionPath::Romaji => write!(f, "romaji"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Full-width reading
    pub reading: String,
    pub path: ResolutionPath,
}
