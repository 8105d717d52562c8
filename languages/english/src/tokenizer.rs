use yomi_core::language::{Token, TokenKind};
use yomi_types::Segmentation;

/// Characters stripped from both ends of a chunk before lookup
pub const STRIP_CHARS: &[char] = &['.', ',', '!', '?', '"'];

/// Splits one line of English into tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    segmentation: Segmentation,
}

impl Tokenizer {
    pub fn new(segmentation: Segmentation) -> Self {
        Self { segmentation }
    }

    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        match self.segmentation {
            Segmentation::Lexical => tokenize_lexical(line),
            Segmentation::Whitespace => tokenize_whitespace(line),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Only plain Latin letters and apostrophes are looked up, with at least one letter
fn is_english(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
        && text.chars().all(|c| c.is_ascii_alphabetic() || c == '\'')
}

fn classify(text: &str, kind: TokenKind) -> TokenKind {
    if is_english(text) {
        kind
    } else {
        TokenKind::PunctuationOrOther
    }
}

/// Word runs, `'` + word runs, and every other non-space character on its own
fn tokenize_lexical(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let kind = if is_word_char(c) {
            TokenKind::Word
        } else if c == '\'' && chars.peek().is_some_and(|&(_, next)| is_word_char(next)) {
            TokenKind::ContractionFragment
        } else {
            let end = start + c.len_utf8();
            tokens.push(Token::new(&line[start..end], TokenKind::PunctuationOrOther));
            continue;
        };

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let text = &line[start..end];
        tokens.push(Token::new(text, classify(text, kind)));
    }

    tokens
}

/// Whitespace-separated chunks, punctuation kept on the surface
fn tokenize_whitespace(line: &str) -> Vec<Token> {
    line.split_whitespace()
        .map(|chunk| {
            let front = chunk.trim_start_matches(STRIP_CHARS);
            let start = chunk.len() - front.len();
            let end = start + front.trim_end_matches(STRIP_CHARS).len();
            let word = &chunk[start..end];

            let kind = if !is_english(word) {
                TokenKind::PunctuationOrOther
            } else if word.starts_with('\'') && word.len() > 1 {
                TokenKind::ContractionFragment
            } else {
                TokenKind::Word
            };

            // Unresolvable chunks keep their full surface as the word
            if kind == TokenKind::PunctuationOrOther {
                return Token::new(chunk, kind);
            }

            Token {
                surface: chunk.to_string(),
                kind,
                word: start..end,
            }
        })
        .collect()
}
