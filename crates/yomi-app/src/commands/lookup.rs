use std::io::{self, Write};

use yomi_core::language::LanguageProcessor;
use yomi_lang_english::tokenizer::STRIP_CHARS;

use crate::cli::LookupArgs;
use crate::state::AppState;

/// One output row: word, reading (or `-`), and where it came from
pub fn lookup_line(state: &AppState, word: &str) -> String {
    let clean = word.trim_matches(STRIP_CHARS);
    match state.processor.resolve(clean) {
        Some(resolution) => format!("{}\t{}\t{}", clean, resolution.reading, resolution.path),
        None => format!("{clean}\t-\tnone"),
    }
}

pub fn run(state: &AppState, args: &LookupArgs) -> anyhow::Result<()> {
    for source in state.processor.sources() {
        tracing::debug!("Tier {}: {} entries", source.name, source.entry_count);
    }

    let mut stdout = io::stdout().lock();
    for word in &args.words {
        writeln!(stdout, "{}", lookup_line(state, word))?;
    }

    Ok(())
}
