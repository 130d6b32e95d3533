//! Scaffolder Core - Shared library for CI workflow scaffolding CLIs
//!
//! This library writes a CI workflow definition and its companion issue
//! templates into a repository, then checks that the dependency manifest the
//! workflow audits is present. It is designed to be driven by small product
//! binaries (e.g., `pip-audit-setup`) that only supply a [`Recipe`]: the fixed
//! paths, the template text and the guidance shown at the end of a run.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Interpolation, directory creation, file writing, manifest check
//! - **Layer 2: Workflow Orchestration** - `Recipe` trait and `Scaffolder` pipeline
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based progress output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based progress output
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{Configuration, Scaffolder};
//!
//! let config = Configuration::new("develop", "3.12");
//! let scaffolder = Scaffolder::new(&MyRecipe, "/path/to/repo", config);
//! let report = scaffolder.run().await?;
//! println!("{}", scaffolder_core::summary::render_summary(&MyRecipe, &report));
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod recipe;
pub mod scaffold;
pub mod summary;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use check::{check_manifest, ManifestCheck};
pub use config::{Configuration, DEFAULT_BRANCH, DEFAULT_RUNTIME_VERSION};
pub use error::{Result, ScaffoldError};
pub use recipe::Recipe;
pub use scaffold::{ScaffoldReport, Scaffolder, Step};
pub use templates::{interpolate, ArtifactKind, GeneratedArtifact, IssueTemplateFrontMatter};

#[cfg(feature = "tui")]
pub use tui::run;
