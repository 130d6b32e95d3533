//! Directory creation and artifact writing

use crate::error::{Result, ScaffoldError};
use crate::templates::GeneratedArtifact;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create each directory (and its parents) under `root` if missing
///
/// Existing directories are left untouched, so calling this twice is a no-op.
pub async fn ensure_directories(root: &Path, directories: &[&str]) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(directories.len());

    for dir in directories {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| ScaffoldError::create_directory(&path, e))?;
        created.push(path);
    }

    Ok(created)
}

/// Write an artifact below `root`, replacing whatever was there
pub async fn write_artifact(root: &Path, artifact: &GeneratedArtifact) -> Result<PathBuf> {
    let target_path = root.join(artifact.relative_path());

    // Ensure parent directories exist
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::create_directory(parent, e))?;
    }

    fs::write(&target_path, artifact.content())
        .await
        .map_err(|e| ScaffoldError::write_file(&target_path, e))?;

    Ok(target_path)
}
