use serde::{Deserialize, Serialize};
use yomi_types::{DisplayMode, LayoutMode, Segmentation};

fn default_fold_full_width() -> bool {
    true
}

fn default_title() -> String {
    "Ruby Print".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RenderingConfig {
    pub layout: LayoutMode,
    pub display: DisplayMode,
    pub segmentation: Segmentation,
    #[serde(default = "default_fold_full_width")]
    pub fold_full_width: bool,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            display: DisplayMode::default(),
            segmentation: Segmentation::default(),
            fold_full_width: default_fold_full_width(),
            title: default_title(),
        }
    }
}
