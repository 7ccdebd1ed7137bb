//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` on the command line
//! 2. `$SHINGLE_CONFIG` environment variable
//! 3. `~/.config/shingle/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shingle: ShingleConfig,
    pub top: TopConfig,
}

/// Shingle extraction defaults shared by every command.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ShingleConfig {
    /// Shingle width `k` when `-k` is not given.
    pub width: usize,
    pub remove_punctuation: bool,
}

/// `shingle top` settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TopConfig {
    /// Number of frequency groups to print when `-n` is not given.
    pub groups: usize,
}

// --- Defaults ---

impl Default for ShingleConfig {
    fn default() -> Self {
        Self {
            width: 3,
            remove_punctuation: false,
        }
    }
}

impl Default for TopConfig {
    fn default() -> Self {
        Self { groups: 5 }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
///
/// An explicit path that does not exist is an error. A missing
/// `$SHINGLE_CONFIG` file logs a warning and falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return read_config(p);
    }

    let from_env = std::env::var_os("SHINGLE_CONFIG").is_some();
    load_implicit(config_path(), from_env)
}

fn load_implicit(path: Option<PathBuf>, from_env: bool) -> Result<Config> {
    match path {
        Some(p) if p.exists() => read_config(&p),
        Some(p) if from_env => {
            tracing::warn!(
                path = %p.display(),
                "SHINGLE_CONFIG names a missing file, using defaults"
            );
            Ok(Config::default())
        }
        _ => Ok(Config::default()),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolve the implicit config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("SHINGLE_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. ~/.config/shingle/config.toml
    if let Some(home) = dirs_home() {
        let p = home.join(".config").join("shingle").join("config.toml");
        return Some(p);
    }

    None
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Show the active config path (for `shingle config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    if let Some(p) = explicit {
        return format!("{} (from --config)", p.display());
    }
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
