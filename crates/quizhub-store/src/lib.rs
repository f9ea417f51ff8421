//! quizhub-store — Persistence adapters.
//!
//! Implements the core `KeyValueStore` trait on a data directory and in
//! memory, and loads the settings that say where the data directory is.

pub mod config;
pub mod file;
pub mod memory;

pub use config::{load_settings, load_settings_from, QuizhubSettings};
pub use file::FileStore;
pub use memory::MemoryStore;
