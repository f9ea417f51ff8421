//! Application settings and store construction.
//!
//! These are process settings (where data lives), distinct from the
//! persisted [`quizhub_core::model::AppConfig`] record the admin edits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::file::FileStore;

/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "QUIZHUB_DATA_DIR";

/// Top-level quizhub settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizhubSettings {
    /// Directory holding the persisted records.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./quizhub-data")
}

impl Default for QuizhubSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl QuizhubSettings {
    /// Open the file store for these settings.
    pub fn open_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}

/// Expand `${NAME}` references from the environment. Unset variables expand
/// to nothing; an unterminated `${` is copied as-is. Substituted values are
/// not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find("${") {
        let Some(len) = rest[open + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let name = &rest[open + 2..open + 2 + len];
        out.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[open + 2 + len + 1..];
    }
    out.push_str(rest);
    out
}

/// Load settings from well-known paths.
///
/// Search order:
/// 1. `quizhub.toml` in the current directory
/// 2. `~/.config/quizhub/config.toml`
///
/// Environment variable override: `QUIZHUB_DATA_DIR`.
pub fn load_settings() -> Result<QuizhubSettings> {
    load_settings_from(None)
}

/// Load settings from an explicit path, or search the default locations.
/// An explicit path must exist.
pub fn load_settings_from(path: Option<&Path>) -> Result<QuizhubSettings> {
    let found = match path {
        Some(p) => {
            anyhow::ensure!(p.exists(), "config file not found: {}", p.display());
            Some(p.to_path_buf())
        }
        None => search_paths().into_iter().find(|candidate| candidate.exists()),
    };

    let mut settings = match found {
        Some(path) => read_settings(&path)?,
        None => QuizhubSettings::default(),
    };

    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => {
            tracing::debug!("{DATA_DIR_ENV} overrides data_dir");
            settings.data_dir = PathBuf::from(dir);
        }
        _ => {}
    }

    Ok(settings)
}

/// Candidate settings files, most specific first.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("quizhub.toml")];
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(".config/quizhub/config.toml"));
    }
    paths
}

fn read_settings(path: &Path) -> Result<QuizhubSettings> {
    tracing::debug!("loading settings from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_settings(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Parse a settings document, expanding `${VAR}` references.
pub fn parse_settings(content: &str) -> Result<QuizhubSettings> {
    let mut settings: QuizhubSettings = toml::from_str(content)?;
    let resolved = resolve_env_vars(&settings.data_dir.to_string_lossy());
    settings.data_dir = PathBuf::from(resolved);
    Ok(settings)
}
