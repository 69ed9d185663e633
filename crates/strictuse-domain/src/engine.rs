use crate::filter::ReportFilter;
use crate::fingerprint::fingerprint_for_diagnostic;
use crate::model::Diagnostic;
use crate::policy::{EffectiveConfig, FailOn, ReportingLevel};
use crate::report::{DomainReport, EvaluationData, SeverityCounts};
use strictuse_types::{Finding, Severity, VerdictStatus};

pub fn evaluate(
    diagnostics: &[Diagnostic],
    filter: &ReportFilter,
    cfg: &EffectiveConfig,
) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();
    let mut suppressed = 0u32;

    for diagnostic in diagnostics {
        let level =
            filter.reporting_level(diagnostic, |d| cfg.reporting_level_for(&d.issue_type));
        match level {
            ReportingLevel::Suppress => suppressed = suppressed.saturating_add(1),
            ReportingLevel::Report(severity) => findings.push(to_finding(diagnostic, severity)),
        }
    }

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    // Truncation only limits what is emitted; verdict and counts see every finding.
    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);
    let total = saturating_u32(findings.len());

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let data = EvaluationData {
        diagnostics_total: saturating_u32(diagnostics.len()),
        diagnostics_suppressed: suppressed,
        findings_total: total,
        findings_emitted: saturating_u32(emitted.len()),
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        counts,
        data,
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn to_finding(diagnostic: &Diagnostic, severity: Severity) -> Finding {
    let fingerprint = fingerprint_for_diagnostic(
        &diagnostic.issue_type,
        diagnostic.kind.as_str(),
        diagnostic.subject.as_deref(),
        diagnostic.location.as_ref().map(|l| l.path.as_str()),
        diagnostic.location.as_ref().and_then(|l| l.line),
    );

    Finding {
        severity,
        code: diagnostic.issue_type.clone(),
        kind: diagnostic.kind,
        subject: diagnostic.subject.clone(),
        message: diagnostic.message.clone(),
        location: diagnostic.location.clone(),
        fingerprint: Some(fingerprint),
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> VerdictStatus {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return VerdictStatus::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => VerdictStatus::Fail,
            FailOn::Error => VerdictStatus::Warn,
        };
    }

    VerdictStatus::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line (missing last)
    // 4) code
    // 5) kind
    // 6) subject
    // 7) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, al) = match &a.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bp, bl) = match &b.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(al.cmp(&bl))
        .then(a.code.cmp(&b.code))
        .then(a.kind.cmp(&b.kind))
        .then(a.subject.cmp(&b.subject))
        .then(a.message.cmp(&b.message))
}
