use anyhow::Context;
use strictuse_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderablePackage, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
use strictuse_types::{
    AnalysisScope, DiagnosticKind, Finding, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, Severity,
    StrictUseData, StrictUseReport, ToolMeta, Verdict, VerdictCounts, VerdictStatus, ids,
};
use time::OffsetDateTime;

use crate::plan::SkipReason;

pub fn parse_report_json(text: &str) -> anyhow::Result<StrictUseReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse strictuse v1 report")
}

pub fn serialize_report(report: &StrictUseReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn serialize_scope(scope: &AnalysisScope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(scope).context("serialize analysis scope")
}

pub fn to_renderable(report: &StrictUseReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict.status {
            VerdictStatus::Pass => RenderableVerdictStatus::Pass,
            VerdictStatus::Warn => RenderableVerdictStatus::Warn,
            VerdictStatus::Fail => RenderableVerdictStatus::Fail,
            VerdictStatus::Skip => RenderableVerdictStatus::Skip,
        },
        reasons: report.verdict.reasons.clone(),
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            packages: report
                .data
                .packages
                .iter()
                .map(|p| RenderablePackage {
                    name: p.name.clone(),
                    namespaces: p.namespaces.clone(),
                })
                .collect(),
            diagnostics_suppressed: report.data.diagnostics_suppressed,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        code: f.code.clone(),
        subject: f.subject.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
    }
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: ids::TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Report for a run that short-circuited before analysis.
pub fn skipped_report(
    reason: SkipReason,
    profile: &str,
    started_at: OffsetDateTime,
) -> StrictUseReport {
    let finished_at = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at,
            ended_at: Some(finished_at),
            duration_ms: Some((finished_at - started_at).whole_milliseconds().max(0) as u64),
        },
        verdict: Verdict {
            status: VerdictStatus::Skip,
            counts: VerdictCounts::default(),
            reasons: vec![reason.code().to_string()],
        },
        findings: Vec::new(),
        data: StrictUseData {
            profile: profile.to_string(),
            ..StrictUseData::default()
        },
    }
}

/// Report written when the tool itself failed, so CI still has a receipt to read.
pub fn runtime_error_report(message: &str) -> StrictUseReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at: now,
            ended_at: Some(now),
            duration_ms: Some(0),
        },
        verdict: Verdict {
            status: VerdictStatus::Fail,
            counts: VerdictCounts {
                error: 1,
                ..VerdictCounts::default()
            },
            reasons: vec![ids::REASON_RUNTIME_ERROR.to_string()],
        },
        findings: vec![Finding {
            severity: Severity::Error,
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            kind: DiagnosticKind::Other,
            subject: None,
            message: message.to_string(),
            location: None,
            fingerprint: None,
        }],
        data: StrictUseData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..StrictUseData::default()
        },
    }
}
