//! Issue template front matter types and parsing

use crate::error::Result;
use serde::{Deserialize, Serialize};

const DELIMITER: &str = "---";

/// Metadata block at the top of a GitHub issue template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTemplateFrontMatter {
    /// Name shown in the issue template chooser
    pub name: String,

    /// Short description shown under the name
    #[serde(default)]
    pub about: String,

    /// Default issue title
    #[serde(default)]
    pub title: String,

    /// Labels applied to issues created from the template
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub assignees: Vec<String>,
}

impl IssueTemplateFrontMatter {
    /// Parse the front matter block delimited by `---` lines
    ///
    /// Returns `Ok(None)` when the content does not open with a complete block.
    pub fn parse(content: &str) -> Result<Option<Self>> {
        let Some(body) = content
            .strip_prefix(DELIMITER)
            .and_then(|rest| rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")))
        else {
            return Ok(None);
        };

        let Some(end) = body
            .split_inclusive('\n')
            .scan(0usize, |offset, line| {
                let start = *offset;
                *offset += line.len();
                Some((start, line))
            })
            .find(|(_, line)| line.trim_end() == DELIMITER)
            .map(|(start, _)| start)
        else {
            return Ok(None);
        };

        let front_matter = serde_yaml::from_str(&body[..end])?;
        Ok(Some(front_matter))
    }

    /// Check if the template applies a label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"---
name: Bug Report
about: Something is broken
title: "Bug: "
labels: ["bug", "triage"]
assignees: []
---

## Description
"#;

    #[test]
    fn test_parse_front_matter() {
        let fm = IssueTemplateFrontMatter::parse(TEMPLATE).unwrap().unwrap();
        assert_eq!(fm.name, "Bug Report");
        assert_eq!(fm.about, "Something is broken");
        assert_eq!(fm.title, "Bug: ");
        assert_eq!(fm.labels, vec!["bug", "triage"]);
        assert!(fm.assignees.is_empty());
        assert!(fm.has_label("Triage"));
        assert!(!fm.has_label("security"));
    }

    #[test]
    fn test_missing_front_matter() {
        assert!(IssueTemplateFrontMatter::parse("## Just a body\n")
            .unwrap()
            .is_none());
        // Opening delimiter without a closing one
        assert!(IssueTemplateFrontMatter::parse("---\nname: x\n")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_optional_fields_default() {
        let fm = IssueTemplateFrontMatter::parse("---\nname: Minimal\n---\n")
            .unwrap()
            .unwrap();
        assert_eq!(fm.name, "Minimal");
        assert!(fm.labels.is_empty());
        assert!(fm.title.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(IssueTemplateFrontMatter::parse("---\nname: [unclosed\n---\n").is_err());
    }
}
