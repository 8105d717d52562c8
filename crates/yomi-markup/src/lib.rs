pub mod document;
pub mod generate;
pub mod ruby;
pub mod style;

#[cfg(test)]
mod tests;

pub use document::{Document, DocumentAssembler};
pub use generate::{GenerateError, GenerateOptions, generate};
pub use ruby::{Fragment, RubyRenderer};

/// Attributes keeping browser auto-translation away from generated markup
pub const NO_TRANSLATE: &str = r#"class="notranslate" translate="no""#;

/// Escape text for use inside HTML elements
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
