//! The scaffolding pipeline
//!
//! Steps run strictly in order: directories, artifacts, manifest check. Each
//! file write stands on its own; a failure part-way leaves earlier files in
//! place.

use crate::check::{self, ManifestCheck};
use crate::config::Configuration;
use crate::error::{Result, ScaffoldError};
use crate::recipe::Recipe;
use crate::templates::{writer, GeneratedArtifact};
use std::path::{Path, PathBuf};

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Artifacts written, relative to the root, in write order
    pub artifacts: Vec<String>,
    pub manifest: ManifestCheck,
}

/// A pipeline step that has just completed
#[derive(Debug, Clone, Copy)]
pub enum Step<'s> {
    /// Every recipe directory exists under the root
    Directories(&'s [&'static str]),
    /// One artifact has been written
    Artifact(&'s GeneratedArtifact),
    Manifest(&'s ManifestCheck),
}

/// Runs a recipe against one target root
pub struct Scaffolder<'a, R: Recipe> {
    recipe: &'a R,
    root: PathBuf,
    config: Configuration,
}

impl<'a, R: Recipe> Scaffolder<'a, R> {
    pub fn new(recipe: &'a R, root: impl Into<PathBuf>, config: Configuration) -> Self {
        Self {
            recipe,
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn recipe(&self) -> &R {
        self.recipe
    }

    /// Create the recipe's directories under the root
    pub async fn ensure_directories(&self) -> Result<Vec<PathBuf>> {
        writer::ensure_directories(&self.root, self.recipe.directories()).await
    }

    /// Render all artifacts in memory
    pub fn render(&self) -> Vec<GeneratedArtifact> {
        self.recipe.render(&self.config)
    }

    /// Write one artifact, overwriting any existing file
    pub async fn write(&self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        writer::write_artifact(&self.root, artifact).await
    }

    pub async fn check_manifest(&self) -> ManifestCheck {
        check::check_manifest(&self.root, self.recipe.manifest_file()).await
    }

    /// Run every step without reporting progress
    pub async fn run(&self) -> Result<ScaffoldReport> {
        self.run_with(|_| Ok(())).await
    }

    /// Run every step, calling `on_step` after each one completes
    ///
    /// An error from `on_step` stops the run before the next step starts.
    pub async fn run_with<F>(&self, mut on_step: F) -> Result<ScaffoldReport>
    where
        F: FnMut(Step<'_>) -> std::io::Result<()>,
    {
        self.ensure_directories().await?;
        on_step(Step::Directories(self.recipe.directories())).map_err(ScaffoldError::Progress)?;

        let artifacts = self.render();
        for artifact in &artifacts {
            self.write(artifact).await?;
            on_step(Step::Artifact(artifact)).map_err(ScaffoldError::Progress)?;
        }

        let manifest = self.check_manifest().await;
        on_step(Step::Manifest(&manifest)).map_err(ScaffoldError::Progress)?;

        Ok(ScaffoldReport {
            root: self.root.clone(),
            artifacts: artifacts
                .iter()
                .map(|a| a.relative_path().to_string())
                .collect(),
            manifest,
        })
    }
}
