use crate::model::Diagnostic;
use crate::policy::{EffectiveConfig, FailOn, ReportingLevel};
use std::collections::BTreeMap;
use strictuse_types::{DiagnosticKind, Location, RepoPath, Severity, ids};

pub fn diagnostic(kind: DiagnosticKind, subject: Option<&str>, issue_type: &str) -> Diagnostic {
    Diagnostic {
        kind,
        subject: subject.map(|s| s.to_string()),
        issue_type: issue_type.to_string(),
        message: format!("{issue_type} reported"),
        location: None,
    }
}

pub fn diagnostic_at(
    kind: DiagnosticKind,
    subject: &str,
    issue_type: &str,
    path: &str,
    line: u32,
) -> Diagnostic {
    Diagnostic {
        location: Some(Location {
            path: RepoPath::new(path),
            line: Some(line),
            col: None,
        }),
        ..diagnostic(kind, Some(subject), issue_type)
    }
}

pub fn config(default_severity: Severity) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        sentinel: ids::SENTINEL_PACKAGE.to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        default_level: ReportingLevel::Report(default_severity),
        issues: BTreeMap::new(),
    }
}
