use std::collections::HashMap;
use std::sync::Arc;

/// Word -> reading lookup provider
pub trait ReadingSource: Send + Sync {
    /// Short name used in logs and resolution paths
    fn name(&self) -> &str;

    /// Exact match on a lower-cased key
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Get source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: String,
    pub entry_count: usize,
}

/// Immutable in-memory reading store, keys lower-cased on insert
#[derive(Debug, Clone, Default)]
pub struct ReadingMap {
    name: String,
    entries: HashMap<String, String>,
}

impl ReadingMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();

        Self {
            name: name.into(),
            entries,
        }
    }

    /// Layer `other` on top of this map, `other` wins on key collisions
    pub fn extend_with(mut self, other: impl IntoIterator<Item = (String, String)>) -> Self {
        for (k, v) in other {
            self.entries.insert(k.to_lowercase(), v);
        }
        self
    }

    /// Merge another map into this one, keeping this map's name.
    /// Entries from `other` with the same word override existing ones
    pub fn merge(mut self, other: ReadingMap) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReadingSource for ReadingMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: self.name.clone(),
            entry_count: self.entries.len(),
        }
    }
}

/// A successful tier lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierHit<'a> {
    pub reading: &'a str,
    pub source: &'a str,
}

/// Ordered list of reading sources, first hit wins
#[derive(Clone, Default)]
pub struct TieredReadings {
    tiers: Vec<Arc<dyn ReadingSource>>,
}

impl TieredReadings {
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Append a tier with lower priority than every tier already present
    pub fn push(mut self, source: Arc<dyn ReadingSource>) -> Self {
        self.tiers.push(source);
        self
    }

    pub fn lookup(&self, key: &str) -> Option<TierHit<'_>> {
        self.tiers.iter().find_map(|tier| {
            tier.lookup(key).map(|reading| TierHit {
                reading,
                source: tier.name(),
            })
        })
    }

    pub fn metadata(&self) -> Vec<SourceMetadata> {
        self.tiers.iter().map(|t| t.metadata()).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
