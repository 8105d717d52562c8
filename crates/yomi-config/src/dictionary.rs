use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load the embedded base dictionary
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra TSV/JSON dictionaries, later files win
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Word -> reading entries layered over the built-in overrides
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Read unknown romaji words (`sushi`) as katakana
    #[serde(default)]
    pub romaji_fallback: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            additional_paths: vec![],
            overrides: BTreeMap::new(),
            romaji_fallback: false,
        }
    }
}
