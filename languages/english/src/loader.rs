use std::path::Path;

use yomi_core::dictionary::{LoadError, ReadingMap};

use crate::dictionary::ReadingDictionary;

pub struct ReadingDictionaryLoader;

impl ReadingDictionaryLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<ReadingMap, LoadError> {
        let tsv = include_str!("../data/readings.tsv");
        tracing::info!("Loading embedded reading dictionary...");
        let dict = ReadingDictionary::from_tsv("base", tsv)?;
        tracing::info!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    /// Load dictionary from file path, `.json` files are parsed as JSON and
    /// everything else as TSV
    pub fn load_from_file(path: &Path) -> Result<ReadingMap, LoadError> {
        tracing::info!("Loading reading dictionary from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let text = std::fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let dict = if is_json {
            ReadingDictionary::from_json(name, &text)?
        } else {
            ReadingDictionary::from_tsv(name, &text)?
        };

        tracing::info!("Loaded {} dictionary entries from file", dict.len());
        Ok(dict)
    }

    /// Merge two dictionaries (later entries override earlier ones by word)
    pub fn merge(base: ReadingMap, additional: ReadingMap) -> ReadingMap {
        base.merge(additional)
    }
}
