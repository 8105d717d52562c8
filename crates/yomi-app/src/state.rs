use std::sync::{Arc, PoisonError, RwLock};

use yomi_config::Config;
use yomi_lang_english::{EnglishProcessor, ProcessorOptions};
use yomi_markup::Document;

/// Processor settings taken from the dictionary and rendering sections
pub fn processor_options(config: &Config) -> ProcessorOptions {
    ProcessorOptions {
        base_dictionary: config.dictionary.enabled,
        additional_paths: config.dictionary.additional_paths.clone(),
        overrides: config
            .dictionary
            .overrides
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        romaji_fallback: config.dictionary.romaji_fallback,
        segmentation: config.rendering.segmentation,
        fold_full_width: config.rendering.fold_full_width,
    }
}

pub struct AppState {
    pub config: Config,
    pub processor: Arc<EnglishProcessor>,
    /// Most recent document, overwritten by every generate run
    last_document: RwLock<Option<Document>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let processor = EnglishProcessor::with_options(processor_options(&config));

        Self {
            config,
            processor: Arc::new(processor),
            last_document: RwLock::new(None),
        }
    }

    pub fn store_document(&self, document: Document) {
        let mut slot = self
            .last_document
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(document);
    }

    pub fn last_document(&self) -> Option<Document> {
        self.last_document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
