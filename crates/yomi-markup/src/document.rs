use yomi_types::{LayoutMode, StyleParams};

use crate::ruby::Fragment;
use crate::style::style_block;
use crate::{NO_TRANSLATE, escape_html};

pub const DEFAULT_TITLE: &str = "Ruby Print";

/// A complete, self-contained HTML artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
    layout: LayoutMode,
}

impl Document {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

/// Wraps rendered lines in the document shell
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    layout: LayoutMode,
    style: StyleParams,
    title: String,
}

impl DocumentAssembler {
    pub fn new(layout: LayoutMode, style: StyleParams) -> Self {
        Self {
            layout,
            style,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn assemble(&self, fragments: &[Fragment]) -> Document {
        let mut html = self.head();

        match self.layout {
            LayoutMode::Flowing => {
                html.push_str("<body>\n<div class=WordSection1><p class=MsoNormal>\n");
                for fragment in fragments {
                    html.push_str(&fragment.markup_with_break());
                    html.push('\n');
                }
                html.push_str("</p></div>\n</body>\n</html>\n");
            }
            LayoutMode::Tabular => {
                html.push_str("<body>\n<table>\n");
                // Blank lines never become empty rows
                for fragment in fragments.iter().filter(|f| !f.is_empty()) {
                    html.push_str("<tr><td>");
                    html.push_str(&fragment.markup());
                    html.push_str("</td></tr>\n");
                }
                html.push_str("</table>\n</body>\n</html>\n");
            }
        }

        Document {
            html,
            layout: self.layout,
        }
    }

    fn head(&self) -> String {
        format!(
            "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
             xmlns:w='urn:schemas-microsoft-com:office:word' \
             xmlns='http://www.w3.org/TR/REC-html40' \
             lang=\"ja\" {NO_TRANSLATE}>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"google\" content=\"notranslate\">\n\
             <title>{}</title>\n\
             {}\n\
             </head>\n",
            escape_html(&self.title),
            style_block(self.layout, &self.style)
        )
    }
}
