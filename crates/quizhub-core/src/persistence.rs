//! Reading and writing the three persisted records.
//!
//! Each record is a JSON document under a fixed key. A missing or
//! unparseable record is replaced by its default; the stored value is not
//! migrated or repaired.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{Catalog, History};
use crate::model::AppConfig;
use crate::traits::KeyValueStore;

/// Key of the [`AppConfig`] record.
pub const CONFIG_KEY: &str = "quiz-app-config";
/// Key of the [`Catalog`] record.
pub const CATALOG_KEY: &str = "quiz-app-data";
/// Key of the [`History`] record.
pub const HISTORY_KEY: &str = "quiz-app-history";

/// Load the record under `key`, falling back to `default()` when it is
/// absent, unreadable, or does not decode.
pub fn load_or_default<T, F>(store: &dyn KeyValueStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default(),
        Err(e) => {
            tracing::warn!("failed to read '{key}', using default: {e:#}");
            return default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("discarding unparseable '{key}' record, using default: {e}");
            default()
        }
    }
}

/// Serialize `value` and write it under `key`.
pub fn save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).with_context(|| format!("failed to serialize '{key}'"))?;
    store
        .set(key, &json)
        .with_context(|| format!("failed to save '{key}'"))
}

/// Everything the app keeps between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub history: History,
}

impl PersistedState {
    /// Load all three records, substituting defaults where needed.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            config: load_or_default(store, CONFIG_KEY, AppConfig::default),
            catalog: load_or_default(store, CATALOG_KEY, Catalog::builtin),
            history: load_or_default(store, HISTORY_KEY, History::default),
        }
    }

    /// Write all three records.
    pub fn save_all(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        save(store, CONFIG_KEY, &self.config)?;
        save(store, CATALOG_KEY, &self.catalog)?;
        save(store, HISTORY_KEY, &self.history)?;
        Ok(())
    }
}
