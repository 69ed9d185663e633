use strictuse_types::Severity;
use std::collections::BTreeMap;

/// What happens to a diagnostic once it is known to concern a checked namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    Report(Severity),
    Suppress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Dependency name that opts a package into strict checks.
    pub sentinel: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    /// Level for issue types without an explicit entry in `issues`.
    pub default_level: ReportingLevel,
    /// Per issue type overrides, keyed by analyzer issue type.
    pub issues: BTreeMap<String, ReportingLevel>,
}

impl EffectiveConfig {
    /// The default reporting-level decision for an issue type.
    pub fn reporting_level_for(&self, issue_type: &str) -> ReportingLevel {
        self.issues
            .get(issue_type)
            .copied()
            .unwrap_or(self.default_level)
    }
}
