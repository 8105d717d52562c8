use yomi_core::language::{LanguageProcessor, Token};
use yomi_types::DisplayMode;

use crate::{NO_TRANSLATE, escape_html};

/// Markup for one input line, one piece per token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pieces: Vec<String>,
}

impl Fragment {
    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    /// No tokens on the line
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn markup(&self) -> String {
        self.pieces.concat()
    }

    /// Markup terminated by a line break
    pub fn markup_with_break(&self) -> String {
        let mut out = self.markup();
        out.push_str("<br>");
        out
    }
}

/// Turns tokens and readings into ruby markup
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyRenderer {
    display: DisplayMode,
}

impl RubyRenderer {
    pub fn new(display: DisplayMode) -> Self {
        Self { display }
    }

    /// Tokenize and resolve one line, then render it
    pub fn render_line<P>(&self, processor: &P, line: &str) -> Fragment
    where
        P: LanguageProcessor + ?Sized,
    {
        let tokens = processor.tokenize(line);
        let readings: Vec<Option<String>> = tokens
            .iter()
            .map(|token| {
                token
                    .kind
                    .is_resolvable()
                    .then(|| processor.resolve(token.word()))
                    .flatten()
                    .map(|r| r.reading)
            })
            .collect();

        self.render_tokens(&tokens, &readings)
    }

    /// Render tokens with their readings, `readings[i]` belongs to `tokens[i]`.
    ///
    /// Readings are expected full-width. Punctuation and other tokens never
    /// get an annotation, whatever reading is passed for them.
    pub fn render_tokens(&self, tokens: &[Token], readings: &[Option<String>]) -> Fragment {
        let pieces = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let reading = readings
                    .get(i)
                    .and_then(|r| r.as_deref())
                    .filter(|_| token.kind.is_resolvable());

                match reading {
                    Some(reading) => self.annotated(token, reading),
                    None => plain(&token.surface),
                }
            })
            .collect();

        Fragment { pieces }
    }

    fn annotated(&self, token: &Token, reading: &str) -> String {
        let ruby = |base: &str| {
            format!(
                "<ruby {NO_TRANSLATE}><rb>{}</rb><rt>{}</rt></ruby>",
                escape_html(base),
                escape_html(reading)
            )
        };

        match self.display {
            DisplayMode::Original => format!("{}<span> </span>", ruby(&token.surface)),
            DisplayMode::Clean => format!(
                "{}{}{}<span> </span>",
                escape_html(token.leading()),
                ruby(token.word()),
                escape_html(token.trailing())
            ),
        }
    }
}

fn plain(text: &str) -> String {
    format!("<span {NO_TRANSLATE}>{} </span>", escape_html(text))
}
