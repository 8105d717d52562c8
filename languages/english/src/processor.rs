use std::path::Path;
use std::sync::Arc;

use yomi_core::dictionary::{ReadingMap, ReadingSource, SourceMetadata, TieredReadings};
use yomi_core::language::{Inflector, LanguageProcessor, Resolution, ResolutionPath, Token};
use yomi_core::preprocess::{DefaultPreprocessor, PassthroughPreprocessor, Preprocessor, to_full_width};
use yomi_types::Segmentation;

use crate::inflection::PluralInflector;
use crate::loader::ReadingDictionaryLoader;
use crate::overrides::default_overrides;
use crate::romaji::RomajiFallback;
use crate::tokenizer::Tokenizer;

/// Knobs for building an [`EnglishProcessor`]
#[derive(Debug, Clone)]
pub struct ProcessorOptions {
    /// Load the embedded base dictionary
    pub base_dictionary: bool,
    /// Extra dictionaries merged over the base, later paths win
    pub additional_paths: Vec<String>,
    /// Extra overrides layered over the built-in override set
    pub overrides: Vec<(String, String)>,
    pub romaji_fallback: bool,
    pub segmentation: Segmentation,
    /// NFKC-fold input before tokenizing
    pub fold_full_width: bool,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            base_dictionary: true,
            additional_paths: vec![],
            overrides: vec![],
            romaji_fallback: false,
            segmentation: Segmentation::default(),
            fold_full_width: true,
        }
    }
}

/// English reading processor
pub struct EnglishProcessor {
    readings: TieredReadings,
    inflector: PluralInflector,
    romaji: Option<RomajiFallback>,
    tokenizer: Tokenizer,
    fold_full_width: bool,
}

impl EnglishProcessor {
    /// Create a new English processor with default configuration (embedded dictionary)
    pub fn new() -> Self {
        Self::with_options(ProcessorOptions::default())
    }

    /// Create a processor from options, loading and merging dictionaries
    pub fn with_options(options: ProcessorOptions) -> Self {
        let mut dict = if options.base_dictionary {
            ReadingDictionaryLoader::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded dictionary: {}", e);
                tracing::warn!("Starting with empty dictionary");
                ReadingMap::new("base")
            })
        } else {
            tracing::warn!("Base dictionary disabled, only overrides apply");
            ReadingMap::new("base")
        };

        // Load and merge additional dictionaries
        for path in &options.additional_paths {
            match ReadingDictionaryLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = ReadingDictionaryLoader::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        let overrides = default_overrides().extend_with(options.overrides);

        Self::from_sources(overrides, Arc::new(dict))
            .with_segmentation(options.segmentation)
            .with_romaji_fallback(options.romaji_fallback)
            .with_full_width_folding(options.fold_full_width)
    }

    /// Build from an explicit override set and a shared base dictionary
    pub fn from_sources(overrides: ReadingMap, base: Arc<dyn ReadingSource>) -> Self {
        Self {
            readings: TieredReadings::new().push(Arc::new(overrides)).push(base),
            inflector: PluralInflector::new(),
            romaji: None,
            tokenizer: Tokenizer::default(),
            fold_full_width: true,
        }
    }

    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.tokenizer = Tokenizer::new(segmentation);
        self
    }

    pub fn with_romaji_fallback(mut self, enabled: bool) -> Self {
        self.romaji = enabled.then(RomajiFallback::new);
        self
    }

    pub fn with_full_width_folding(mut self, enabled: bool) -> Self {
        self.fold_full_width = enabled;
        self
    }

    /// Loaded tiers in lookup order
    pub fn sources(&self) -> Vec<SourceMetadata> {
        self.readings.metadata()
    }
}

impl Default for EnglishProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        if self.fold_full_width {
            DefaultPreprocessor.process(text)
        } else {
            PassthroughPreprocessor.process(text)
        }
    }

    fn tokenize(&self, line: &str) -> Vec<Token> {
        self.tokenizer.tokenize(line)
    }

    fn resolve(&self, word: &str) -> Option<Resolution> {
        let key = word.to_lowercase();
        if key.is_empty() {
            return None;
        }

        // Try direct lookup first
        if let Some(hit) = self.readings.lookup(&key) {
            return Some(Resolution {
                reading: to_full_width(hit.reading),
                path: ResolutionPath::Direct {
                    source: hit.source.to_string(),
                },
            });
        }

        // One level of suffix stripping, stems are never re-inflected
        for candidate in self.inflector.stems(&key) {
            if let Some(hit) = self.readings.lookup(&candidate.stem) {
                tracing::debug!(
                    "'{}' resolved through stem '{}' ({})",
                    key,
                    candidate.stem,
                    candidate.rule
                );
                let reading = format!("{}{}", hit.reading, candidate.suffix_reading);
                return Some(Resolution {
                    reading: to_full_width(&reading),
                    path: ResolutionPath::Inflected {
                        stem: candidate.stem,
                        source: hit.source.to_string(),
                        rule: candidate.rule,
                    },
                });
            }
        }

        if let Some(kana) = self.romaji.as_ref().and_then(|r| r.to_katakana(&key)) {
            tracing::debug!("'{}' read as romaji", key);
            return Some(Resolution {
                reading: kana,
                path: ResolutionPath::Romaji,
            });
        }

        tracing::debug!("No reading for '{}'", key);
        None
    }
}
