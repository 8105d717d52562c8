use std::collections::HashMap;

use yomi_core::dictionary::{LoadError, ReadingMap};

/// Parsers for English -> katakana word lists.
///
/// Every format ends up as a [`ReadingMap`], the one store the processor
/// queries.
pub struct ReadingDictionary;

impl ReadingDictionary {
    /// Parse `word<TAB>reading` lines, `#` starts a comment line
    pub fn from_tsv(name: impl Into<String>, text: &str) -> Result<ReadingMap, LoadError> {
        let mut entries = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((word, reading)) = line.split_once('\t') else {
                return Err(LoadError::InvalidFormat {
                    line: idx + 1,
                    reason: "expected word<TAB>reading".to_string(),
                });
            };

            let word = word.trim();
            let reading = reading.trim();
            if word.is_empty() || reading.is_empty() {
                return Err(LoadError::InvalidFormat {
                    line: idx + 1,
                    reason: "empty word or reading".to_string(),
                });
            }

            entries.push((word, reading));
        }

        Ok(ReadingMap::from_pairs(name, entries))
    }

    /// Parse a flat JSON object of `{"word": "reading"}`
    pub fn from_json(name: impl Into<String>, json_str: &str) -> Result<ReadingMap, LoadError> {
        let data: HashMap<String, String> =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        Ok(ReadingMap::from_pairs(name, data))
    }
}
