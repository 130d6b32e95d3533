//! Recipe trait for CLI binaries
//!
//! This trait defines the interface that each product (e.g., the pip-audit
//! setup tool) must implement to describe what gets scaffolded.

use crate::config::Configuration;
use crate::templates::GeneratedArtifact;

/// Configuration trait for different scaffolding products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Directories to create and artifacts to render
/// - The dependency manifest the generated workflow relies on
/// - Post-setup instructions
pub trait Recipe: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Directories created under the target root, relative and `/`-separated
    fn directories(&self) -> &'static [&'static str];

    /// Render every artifact for the given configuration
    ///
    /// Must be pure: the same configuration always yields the same artifacts.
    fn render(&self, config: &Configuration) -> Vec<GeneratedArtifact>;

    /// File name of the dependency manifest expected at the target root
    fn manifest_file(&self) -> &'static str;

    /// Label for the runtime version in progress output
    fn runtime_label(&self) -> &'static str {
        "Runtime version"
    }

    /// Numbered instructions shown after setup completes
    fn next_steps(&self) -> Vec<String>;

    /// Bullets describing when the generated workflow runs
    fn workflow_behaviour(&self) -> Vec<String> {
        Vec::new()
    }

    /// Closing line of the summary
    fn footer(&self) -> Option<&'static str> {
        None
    }
}
