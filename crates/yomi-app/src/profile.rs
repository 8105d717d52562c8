use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use yomi_config::Config;

pub const HOME_ENV: &str = "YOMI_HOME";

/// `$YOMI_HOME`, or `.yomi` in the working directory
fn yomi_root() -> PathBuf {
    env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".yomi"))
}

fn profiles_dir() -> PathBuf {
    yomi_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Write the main profile from defaults, keeping an existing one unless `force`
pub fn init_user_config(force: bool) -> anyhow::Result<PathBuf> {
    init_profile_in(&profiles_dir(), force)
}

pub(crate) fn init_profile_in(dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");
    if main_profile.exists() && !force {
        tracing::info!("Main profile already exists: {}", main_profile.display());
        return Ok(main_profile);
    }

    let profile = Profile {
        name: "main".into(),
        value: Config::default(),
    };
    fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created main profile in {}", dir.display());

    Ok(main_profile)
}

/// Config from an explicit file, else the main profile, else defaults
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from {}", path.display());
        return Config::load(path).with_context(|| format!("failed to load {}", path.display()));
    }

    load_main_profile_in(&profiles_dir())
}

pub(crate) fn load_main_profile_in(dir: &Path) -> anyhow::Result<Config> {
    let main_file = dir.join("main.json");
    if !main_file.exists() {
        tracing::debug!("No main profile, using defaults");
        return Ok(Config::new());
    }

    let data = fs::read_to_string(&main_file)
        .with_context(|| format!("failed to read {}", main_file.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("invalid profile {}", main_file.display()))?;

    let mut config = profile.value;
    config.apply_env();
    Ok(config)
}
