//! End-of-run summary text

use crate::recipe::Recipe;
use crate::scaffold::ScaffoldReport;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Render the summary printed once scaffolding has finished
///
/// Lists every written file, the manifest check outcome, then the recipe's
/// static guidance.
pub fn render_summary<R: Recipe>(recipe: &R, report: &ScaffoldReport) -> String {
    let mut out = String::new();

    out.push_str("Files created:\n");
    for path in &report.artifacts {
        let _ = writeln!(out, "   - {}", path);
    }
    out.push('\n');
    out.push_str(&report.manifest.message());
    out.push('\n');
    out.push('\n');
    out.push_str(&render_guidance(recipe));

    out
}

/// The static part of the summary: banner, next steps and workflow notes
pub fn render_guidance<R: Recipe>(recipe: &R) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    out.push_str("🎉 Setup Complete!\n");
    let _ = writeln!(out, "{}", rule);
    out.push('\n');

    out.push_str("Next steps:\n");
    for (i, step) in recipe.next_steps().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }

    let behaviour = recipe.workflow_behaviour();
    if !behaviour.is_empty() {
        out.push('\n');
        out.push_str("The workflow will:\n");
        for line in &behaviour {
            let _ = writeln!(out, "• {}", line);
        }
    }

    if let Some(footer) = recipe.footer() {
        out.push('\n');
        let _ = writeln!(out, "{}", footer);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::ManifestCheck;
    use crate::config::Configuration;
    use crate::templates::GeneratedArtifact;
    use std::path::PathBuf;

    #[derive(Clone)]
    struct Minimal;

    impl Recipe for Minimal {
        fn name(&self) -> &'static str {
            "minimal"
        }
        fn display_name(&self) -> &'static str {
            "Minimal"
        }
        fn cli_description(&self) -> &'static str {
            "Minimal recipe"
        }
        fn directories(&self) -> &'static [&'static str] {
            &["ci"]
        }
        fn render(&self, _config: &Configuration) -> Vec<GeneratedArtifact> {
            Vec::new()
        }
        fn manifest_file(&self) -> &'static str {
            "deps.lock"
        }
        fn next_steps(&self) -> Vec<String> {
            vec!["Commit".to_string(), "Push".to_string()]
        }
    }

    fn report(present: bool) -> ScaffoldReport {
        ScaffoldReport {
            root: PathBuf::from("/repo"),
            artifacts: vec!["ci/a.yml".to_string(), "ci/b.md".to_string()],
            manifest: ManifestCheck {
                file_name: "deps.lock",
                path: PathBuf::from("/repo/deps.lock"),
                present,
            },
        }
    }

    #[test]
    fn test_summary_lists_every_artifact() {
        let text = render_summary(&Minimal, &report(true));
        assert!(text.contains("   - ci/a.yml\n"));
        assert!(text.contains("   - ci/b.md\n"));
        assert!(text.contains("✅ Found deps.lock file"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_summary_warns_on_missing_manifest() {
        let text = render_summary(&Minimal, &report(false));
        assert!(text.contains("⚠️  Warning: deps.lock not found"));
    }

    #[test]
    fn test_guidance_numbers_steps_and_skips_empty_sections() {
        let text = render_guidance(&Minimal);
        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("🎉 Setup Complete!"));
        assert!(text.contains("1. Commit\n2. Push\n"));
        assert!(!text.contains("The workflow will:"));
    }
}
