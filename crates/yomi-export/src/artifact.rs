use std::fs;
use std::path::{Path, PathBuf};

use yomi_markup::Document;
use yomi_types::ExportFormat;

use crate::ExportError;

/// UTF-8 byte-order mark, needed for mobile browsers to pick the right encoding
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// An exported document ready to be served or saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Encode a document for download
    pub fn new(document: &Document, format: ExportFormat, file_stem: &str) -> Self {
        let html = document.as_str().as_bytes();
        let bytes = match format {
            ExportFormat::Doc => html.to_vec(),
            ExportFormat::Html => [UTF8_BOM, html].concat(),
        };

        Self {
            file_name: format!("{}.{}", file_stem, format.extension()),
            mime_type: format.mime_type(),
            bytes,
        }
    }

    /// Write into `dir` under the artifact's file name
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, &self.bytes)?;
        tracing::info!(
            "Exported {} ({}, {} bytes)",
            path.display(),
            self.mime_type,
            self.bytes.len()
        );
        Ok(())
    }
}
