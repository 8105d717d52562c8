pub mod dictionary;
pub mod inflection;
pub mod loader;
pub mod overrides;
pub mod processor;
pub mod romaji;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use dictionary::ReadingDictionary;
pub use inflection::PluralInflector;
pub use loader::ReadingDictionaryLoader;
pub use overrides::default_overrides;
pub use processor::{EnglishProcessor, ProcessorOptions};
pub use romaji::RomajiFallback;
pub use tokenizer::Tokenizer;
