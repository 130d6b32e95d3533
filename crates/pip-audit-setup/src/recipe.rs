//! pip-audit security workflow recipe

use crate::templates;
use scaffolder_core::{Configuration, GeneratedArtifact, Recipe};

pub const WORKFLOW_DIR: &str = ".github/workflows";
pub const ISSUE_TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE";

pub const WORKFLOW_PATH: &str = ".github/workflows/security-audit.yml";
pub const VULNERABILITY_REPORT_PATH: &str =
    ".github/ISSUE_TEMPLATE/security-vulnerability-report.md";
pub const CLEAN_REPORT_PATH: &str = ".github/ISSUE_TEMPLATE/clean-security-audit-report.md";

/// Dependency manifest the workflow audits
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Python security audit product configuration
#[derive(Clone)]
pub struct SecurityAuditRecipe;

impl Recipe for SecurityAuditRecipe {
    fn name(&self) -> &'static str {
        "pip-audit-setup"
    }

    fn display_name(&self) -> &'static str {
        "Python Security Audit"
    }

    fn cli_description(&self) -> &'static str {
        "Set up Python Security Audit workflow"
    }

    fn directories(&self) -> &'static [&'static str] {
        &[WORKFLOW_DIR, ISSUE_TEMPLATE_DIR]
    }

    fn render(&self, config: &Configuration) -> Vec<GeneratedArtifact> {
        let (vulnerability_report, clean_report) = templates::render_issue_templates();

        vec![
            GeneratedArtifact::workflow(WORKFLOW_PATH, templates::render_workflow(config)),
            GeneratedArtifact::issue_template(VULNERABILITY_REPORT_PATH, vulnerability_report),
            GeneratedArtifact::issue_template(CLEAN_REPORT_PATH, clean_report),
        ]
    }

    fn manifest_file(&self) -> &'static str {
        MANIFEST_FILE
    }

    fn runtime_label(&self) -> &'static str {
        "Python version"
    }

    fn next_steps(&self) -> Vec<String> {
        vec![
            "Commit and push the new files to your repository".to_string(),
            "Ensure your repository has Issues enabled".to_string(),
            "Go to Actions tab and manually trigger the workflow to test".to_string(),
            "Check that the workflow has necessary permissions:\n   \
             - Settings → Actions → General → Workflow permissions\n   \
             - Should have 'Read and write permissions'"
                .to_string(),
        ]
    }

    fn workflow_behaviour(&self) -> Vec<String> {
        vec![
            "Run automatically every Monday at 8:00 AM UTC".to_string(),
            format!("Run when {} changes", MANIFEST_FILE),
            "Can be triggered manually from Actions tab".to_string(),
        ]
    }

    fn footer(&self) -> Option<&'static str> {
        Some("📚 For more details, see the README.md file")
    }
}
