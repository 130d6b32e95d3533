//! Run configuration supplied on the command line

/// Branch the generated workflow watches for pushes when none is given
pub const DEFAULT_BRANCH: &str = "main";

/// Runtime version written into the workflow environment when none is given
pub const DEFAULT_RUNTIME_VERSION: &str = "3.11";

/// Parameters interpolated into the workflow template
///
/// Both values are free-form and never validated. Once built, a configuration
/// is read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    branch: String,
    runtime_version: String,
}

impl Configuration {
    pub fn new(branch: impl Into<String>, runtime_version: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            runtime_version: runtime_version.into(),
        }
    }

    /// Branch listed under the workflow's push trigger
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Version exported to the workflow environment
    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH, DEFAULT_RUNTIME_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.branch(), "main");
        assert_eq!(config.runtime_version(), "3.11");
    }

    #[test]
    fn test_values_kept_verbatim() {
        let config = Configuration::new("release/2.x", " 3.12-dev ");
        assert_eq!(config.branch(), "release/2.x");
        assert_eq!(config.runtime_version(), " 3.12-dev ");
    }
}
