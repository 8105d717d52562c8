use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::export::ExportConfig;
use self::rendering::RenderingConfig;
use self::style::StyleConfig;

pub mod dictionary;
pub mod export;
pub mod rendering;
pub mod style;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub style: StyleConfig,
    pub dictionary: DictionaryConfig,
    pub rendering: RenderingConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Defaults plus environment overrides
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a JSON profile, missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)?;
        config.apply_env();
        Ok(config)
    }

    /// Environment wins over file values
    pub fn apply_env(&mut self) {
        self.export.apply_env();
    }
}
