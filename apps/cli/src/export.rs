//! Profile export to disk

use std::path::{Path, PathBuf};

use chrono::Utc;
use profile_store::{ProfileStore, ProfileStoreError};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// File name used when no explicit output path is given
pub fn default_export_file_name() -> String {
    format!("perfiles_{}.json", Utc::now().timestamp_millis())
}

/// Writes the store's JSON export to `output`, or to a timestamped file in
/// `export_dir`, and returns the path written.
pub fn export_profiles(
    store: &ProfileStore,
    export_dir: &Path,
    output: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => export_dir.join(default_export_file_name()),
    };

    let data = store.export_snapshot()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, data)?;

    info!(path = %path.display(), "Exported profiles");
    Ok(path)
}
