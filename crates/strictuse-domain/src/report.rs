use strictuse_types::{Finding, Severity, VerdictStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info = counts.info.saturating_add(1),
                Severity::Warning => counts.warning = counts.warning.saturating_add(1),
                Severity::Error => counts.error = counts.error.saturating_add(1),
            }
        }
        counts
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationData {
    pub diagnostics_total: u32,
    pub diagnostics_suppressed: u32,
    pub findings_total: u32,
    pub findings_emitted: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: VerdictStatus,
    pub findings: Vec<Finding>,
    pub counts: SeverityCounts,
    pub data: EvaluationData,
}
