use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = profile::load_config(cli.profile.as_deref())?;

    match cli.command {
        Command::Generate(args) => {
            args.apply_to(&mut config);
            let state = AppState::new(config);
            commands::generate::run(&state, &args)
        }
        Command::Lookup(args) => {
            args.apply_to(&mut config);
            let state = AppState::new(config);
            commands::lookup::run(&state, &args)
        }
        Command::Init { force } => {
            let path = profile::init_user_config(force)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Logs go to stderr, stdout carries the document
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
