use std::env;

use serde::{Deserialize, Serialize};
use yomi_types::ExportFormat;

pub const PASSWORD_ENV: &str = "YOMI_EXPORT_PASSWORD";

fn default_file_stem() -> String {
    "ruby_print".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// File name without extension
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
    /// Shared secret gating export, `None` leaves export open
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            file_stem: default_file_stem(),
            password: None,
        }
    }
}

impl ExportConfig {
    pub fn apply_env(&mut self) {
        if let Ok(password) = env::var(PASSWORD_ENV) {
            self.password = Some(password);
        }
    }
}
