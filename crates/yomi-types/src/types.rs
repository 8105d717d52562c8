use serde::{Deserialize, Serialize};

/// Document layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Continuous annotated prose, one `<br>` per input line
    #[default]
    Flowing,
    /// Single-column table, one row per non-blank input line
    Tabular,
}

/// What the base text of an annotation shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Token exactly as it appeared, attached punctuation included
    #[default]
    Original,
    /// Cleaned word only; stripped punctuation is emitted right outside the annotation
    Clean,
}

/// How a line is cut into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segmentation {
    /// Word runs, contraction fragments and single punctuation characters
    #[default]
    Lexical,
    /// Whitespace-separated chunks with punctuation left attached
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Word-importable `.doc`
    #[default]
    Doc,
    /// Portable `.html` with a UTF-8 byte-order mark
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Doc => "doc",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Doc => "application/msword",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

/// Presentation parameters injected into the document style block.
///
/// Values are trusted as-is; range clamping happens in the config layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleParams {
    /// Body text size in pt
    pub body_font_size: u32,
    /// Reading (ruby) text size in pt
    pub ruby_font_size: u32,
    pub line_height: f32,
    /// Table cell padding in px, tabular layout only
    pub cell_padding: u32,
}

impl StyleParams {
    /// Defaults for the given layout
    pub fn for_layout(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Flowing => Self {
                body_font_size: 16,
                ruby_font_size: 9,
                line_height: 2.0,
                cell_padding: 10,
            },
            LayoutMode::Tabular => Self {
                body_font_size: 20,
                ruby_font_size: 10,
                line_height: 2.5,
                cell_padding: 10,
            },
        }
    }
}

impl Default for StyleParams {
    fn default() -> Self {
        Self::for_layout(LayoutMode::default())
    }
}
