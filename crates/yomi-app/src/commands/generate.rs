use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use yomi_export::{AccessGate, Artifact};
use yomi_markup::{GenerateError, GenerateOptions, generate};

use crate::cli::GenerateArgs;
use crate::state::AppState;

/// Generate options from the merged config
pub fn generate_options(state: &AppState) -> GenerateOptions {
    let config = &state.config;
    let layout = config.rendering.layout;

    GenerateOptions {
        layout,
        display: config.rendering.display,
        style: config.style.resolve(layout),
        title: config.rendering.title.clone(),
    }
}

fn read_input(args: &GenerateArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display())),
        _ => {
            if atty::is(atty::Stream::Stdin) {
                tracing::info!("Reading text from stdin, finish with Ctrl+D");
            }
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Run one generate action, storing the result as the most recent document.
///
/// Returns `false` when there was nothing to process.
pub fn generate_into_state(state: &AppState, text: &str) -> bool {
    let options = generate_options(state);
    match generate(state.processor.as_ref(), text, &options) {
        Ok(document) => {
            tracing::debug!("Generated {} bytes", document.as_str().len());
            state.store_document(document);
            true
        }
        Err(GenerateError::NoInput) => {
            tracing::warn!("Nothing to process: {}", GenerateError::NoInput);
            false
        }
    }
}

/// Export the most recent document, behind the password gate
pub fn export_last(
    state: &AppState,
    dir: &Path,
    password: Option<&str>,
) -> anyhow::Result<PathBuf> {
    let gate = AccessGate::with_secret(state.config.export.password.clone());
    gate.authorize(password).context("export refused")?;

    let document = state
        .last_document()
        .context("nothing has been generated yet")?;

    let export = &state.config.export;
    let artifact = Artifact::new(&document, export.format, &export.file_stem);
    let path = artifact.write_to_dir(dir)?;
    Ok(path)
}

pub fn run(state: &AppState, args: &GenerateArgs) -> anyhow::Result<()> {
    let text = read_input(args)?;

    if !generate_into_state(state, &text) {
        eprintln!("no input provided");
        return Ok(());
    }

    if let Some(dir) = &args.export_dir {
        let path = export_last(state, dir, args.password.as_deref())?;
        println!("{}", path.display());
        return Ok(());
    }

    // Preview
    if let Some(document) = state.last_document() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_str().as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
