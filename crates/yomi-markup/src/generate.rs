use yomi_core::language::LanguageProcessor;
use yomi_types::{DisplayMode, LayoutMode, StyleParams};

use crate::document::{DEFAULT_TITLE, Document, DocumentAssembler};
use crate::ruby::{Fragment, RubyRenderer};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no input provided")]
    NoInput,
}

/// Everything a generate run needs besides the processor and the text
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub layout: LayoutMode,
    pub display: DisplayMode,
    pub style: StyleParams,
    pub title: String,
}

impl GenerateOptions {
    /// Defaults for a layout, style included
    pub fn for_layout(layout: LayoutMode) -> Self {
        Self {
            layout,
            display: DisplayMode::default(),
            style: StyleParams::for_layout(layout),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::for_layout(LayoutMode::default())
    }
}

/// Convert a whole input text into a document.
///
/// Lines are rendered independently. Whitespace-only input is reported as
/// [`GenerateError::NoInput`] instead of producing an empty document.
pub fn generate<P>(
    processor: &P,
    text: &str,
    options: &GenerateOptions,
) -> Result<Document, GenerateError>
where
    P: LanguageProcessor + ?Sized,
{
    let normalized = processor.normalize(text);
    let body = normalized.trim();
    if body.is_empty() {
        return Err(GenerateError::NoInput);
    }

    let renderer = RubyRenderer::new(options.display);
    let fragments: Vec<Fragment> = body
        .lines()
        .map(|line| renderer.render_line(processor, line))
        .collect();

    tracing::debug!(
        "Rendered {} lines ({} tokens), layout {:?}",
        fragments.len(),
        fragments.iter().map(|f| f.pieces().len()).sum::<usize>(),
        options.layout
    );

    let document = DocumentAssembler::new(options.layout, options.style)
        .with_title(options.title.clone())
        .assemble(&fragments);

    Ok(document)
}
