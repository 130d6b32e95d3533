//! Error types for scaffolding runs
//!
//! Only filesystem failures can stop a run. They carry the path that failed so
//! the message printed at the process boundary says where it happened.

use std::path::PathBuf;

/// Errors raised while scaffolding
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Issue template front matter is not valid YAML
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// Progress output could not be written to the terminal
    #[error("failed to report progress: {0}")]
    Progress(#[source] std::io::Error),
}

impl ScaffoldError {
    pub fn create_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_name_the_path() {
        let err = ScaffoldError::write_file(
            ".github/workflows/ci.yml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains(".github/workflows/ci.yml"));
        assert!(message.contains("denied"));
    }
}
