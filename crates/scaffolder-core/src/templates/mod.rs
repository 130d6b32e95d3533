//! Generated artifacts and template rendering
//!
//! This module provides:
//! - The in-memory artifact type produced by a recipe (GeneratedArtifact)
//! - Placeholder interpolation for template text
//! - Issue template front matter parsing
//! - Directory creation and artifact writing

pub mod front_matter;
pub mod writer;

use crate::error::Result;

pub use front_matter::IssueTemplateFrontMatter;
pub use writer::{ensure_directories, write_artifact};

/// What a generated file is, used to pick progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Workflow,
    IssueTemplate,
}

/// A rendered file waiting to be written under the target root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    relative_path: String,
    content: String,
    kind: ArtifactKind,
}

impl GeneratedArtifact {
    pub fn new(
        kind: ArtifactKind,
        relative_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn workflow(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Workflow, relative_path, content)
    }

    pub fn issue_template(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(ArtifactKind::IssueTemplate, relative_path, content)
    }

    /// Path relative to the target root, always `/`-separated
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Parse the YAML front matter heading the content, if any
    pub fn front_matter(&self) -> Result<Option<IssueTemplateFrontMatter>> {
        IssueTemplateFrontMatter::parse(&self.content)
    }
}

/// Substitute every placeholder in `template` with its bound value
///
/// Single left-to-right pass: text coming from a value is never scanned again,
/// so values containing placeholder tokens are written verbatim. When two
/// placeholders start at the same offset the first binding wins.
pub fn interpolate(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let next = bindings
            .iter()
            .filter(|(placeholder, _)| !placeholder.is_empty())
            .filter_map(|(placeholder, value)| {
                rest.find(placeholder).map(|idx| (idx, *placeholder, *value))
            })
            .min_by_key(|(idx, _, _)| *idx);

        match next {
            Some((idx, placeholder, value)) => {
                rendered.push_str(&rest[..idx]);
                rendered.push_str(value);
                rest = &rest[idx + placeholder.len()..];
            }
            None => {
                rendered.push_str(rest);
                return rendered;
            }
        }
    }
}
