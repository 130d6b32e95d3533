//! Charm-style progress output using cliclack

use crate::config::Configuration;
use crate::recipe::Recipe;
use crate::scaffold::{ScaffoldReport, Scaffolder, Step};
use crate::summary;
use crate::templates::{ArtifactKind, GeneratedArtifact};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for a setup run
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Repository root to scaffold into (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Values interpolated into the workflow
    pub config: Configuration,
}

/// Run the scaffolder, reporting each step as it completes
pub async fn run<R: Recipe>(recipe: &R, args: SetupArgs) -> Result<ScaffoldReport> {
    cliclack::intro(recipe.name())?;
    cliclack::log::step(format!("🔧 Setting up {} workflow...", recipe.display_name()))?;

    let root = resolve_root(args.directory.as_deref());
    cliclack::log::info(format!("📁 Repository: {}", root.display()))?;

    let scaffolder = Scaffolder::new(recipe, root, args.config);
    let mut templates = Vec::new();

    let report = scaffolder
        .run_with(|step| match step {
            Step::Directories(dirs) => {
                for dir in dirs {
                    cliclack::log::success(format!("Created directory: {}", dir))?;
                }
                Ok(())
            }
            Step::Artifact(artifact) => match artifact.kind() {
                ArtifactKind::Workflow => {
                    let config = scaffolder.config();
                    cliclack::log::success(format!(
                        "Created workflow file: {}\n   - Branch: {}\n   - {}: {}",
                        artifact.relative_path().cyan(),
                        config.branch(),
                        recipe.runtime_label(),
                        config.runtime_version()
                    ))
                }
                ArtifactKind::IssueTemplate => {
                    templates.push(template_line(artifact));
                    Ok(())
                }
            },
            Step::Manifest(_) => {
                if templates.is_empty() {
                    return Ok(());
                }
                cliclack::log::success(format!("Created issue templates:\n{}", templates.join("\n")))
            }
        })
        .await?;

    print_summary(recipe, &report)?;

    Ok(report)
}

/// Resolve the target root against the current directory
pub fn resolve_root(directory: Option<&Path>) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) if dir.as_os_str().is_empty() || dir == Path::new(".") => current_dir,
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    }
}

/// Progress line for a written issue template, named from its front matter
///
/// Unparseable front matter falls back to the bare path; the file is already
/// on disk by then.
fn template_line(artifact: &GeneratedArtifact) -> String {
    match artifact.front_matter() {
        Ok(Some(fm)) => format!("   - {} ({})", artifact.relative_path(), fm.name),
        _ => format!("   - {}", artifact.relative_path()),
    }
}

fn print_summary<R: Recipe>(recipe: &R, report: &ScaffoldReport) -> Result<()> {
    // Printed unindented so the manifest warning appears exactly as rendered
    println!();
    print!("{}", summary::render_summary(recipe, report));

    cliclack::outro(format!("{} is ready", recipe.display_name()).green().to_string())?;

    Ok(())
}
