//! Dependency manifest presence check

use std::path::{Path, PathBuf};
use tokio::fs;

/// Manifest check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestCheck {
    pub file_name: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

impl ManifestCheck {
    /// Line reported when the manifest exists
    pub fn found_message(&self) -> String {
        format!("✅ Found {} file", self.file_name)
    }

    /// Warning reported when the manifest is missing
    pub fn warning_message(&self) -> String {
        format!(
            "⚠️  Warning: {name} not found\n   The workflow expects a {name} file in the repository root",
            name = self.file_name
        )
    }

    /// Whichever of the two messages applies
    pub fn message(&self) -> String {
        if self.present {
            self.found_message()
        } else {
            self.warning_message()
        }
    }
}

/// Check whether `file_name` exists directly under `root`
///
/// Never fails: a path that cannot be inspected counts as absent. Only the
/// presence is checked, the content is never read.
pub async fn check_manifest(root: &Path, file_name: &'static str) -> ManifestCheck {
    let path = root.join(file_name);
    let present = fs::try_exists(&path).await.unwrap_or(false);

    ManifestCheck {
        file_name,
        path,
        present,
    }
}
