pub mod admin;
pub mod history;
pub mod init;
pub mod list;
pub mod play;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizhub_core::traits::StaticAuthenticator;
use quizhub_core::App;
use quizhub_store::{load_settings_from, FileStore};

/// Where the persisted records live, as given on the command line.
pub struct DataLocation {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Load settings and open the app on its file store.
pub fn open_app(location: &DataLocation) -> Result<App<FileStore>> {
    let mut settings = load_settings_from(location.config.as_deref())?;
    if let Some(dir) = &location.data_dir {
        settings.data_dir = dir.clone();
    }
    tracing::debug!("using data directory {}", settings.data_dir.display());
    Ok(App::new(settings.open_store(), StaticAuthenticator::default()))
}

/// Read an uploaded quiz file.
pub async fn read_quiz_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read quiz file: {}", path.display()))
}
