//! Workflow and issue template text

use scaffolder_core::{interpolate, Configuration};

pub const BRANCH_PLACEHOLDER: &str = "__BRANCH__";
pub const PYTHON_VERSION_PLACEHOLDER: &str = "__PYTHON_VERSION__";

/// Workflow skeleton with branch and Python version placeholders
pub const WORKFLOW_TEMPLATE: &str = include_str!("../templates/security-audit.yml");

pub const VULNERABILITY_REPORT_TEMPLATE: &str =
    include_str!("../templates/security-vulnerability-report.md");

pub const CLEAN_REPORT_TEMPLATE: &str = include_str!("../templates/clean-security-audit-report.md");

/// Render the security audit workflow for a configuration
pub fn render_workflow(config: &Configuration) -> String {
    interpolate(
        WORKFLOW_TEMPLATE,
        &[
            (BRANCH_PLACEHOLDER, config.branch()),
            (PYTHON_VERSION_PLACEHOLDER, config.runtime_version()),
        ],
    )
}

/// The vulnerability report and clean report issue templates, in that order
pub fn render_issue_templates() -> (&'static str, &'static str) {
    (VULNERABILITY_REPORT_TEMPLATE, CLEAN_REPORT_TEMPLATE)
}
