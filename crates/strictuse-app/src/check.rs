//! The `check` use case: filter analyzer diagnostics and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use strictuse_settings::{Overrides, ResolvedConfig};
use strictuse_types::{
    ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, StrictUseData, StrictUseReport, ToolMeta, Verdict,
    VerdictCounts, VerdictStatus, ids,
};
use time::OffsetDateTime;
use tracing::debug;

use crate::config::resolve_settings;
use crate::plan::{PlanOutcome, plan_for};
use crate::report::skipped_report;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Directory holding the root manifest and lock file.
    pub project_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Analyzer output. Only read when the plan asks for analysis.
    pub diagnostics_path: &'a Utf8Path,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub plan: PlanOutcome,
    /// The generated report.
    pub report: StrictUseReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: resolve config, plan, read diagnostics, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_settings(input.config_text, input.overrides.clone())?;
    let effective = &resolved.effective;

    let ctx = strictuse_repo::ProjectContext::load(input.project_root, &effective.sentinel)
        .context("load project")?;
    let analysis = match plan_for(&ctx) {
        PlanOutcome::Skipped(reason) => {
            let report = skipped_report(reason, &effective.profile, started_at);
            return Ok(CheckOutput {
                plan: PlanOutcome::Skipped(reason),
                report,
                resolved_config: resolved,
            });
        }
        PlanOutcome::Analyze(analysis) => analysis,
    };

    let diagnostics = strictuse_repo::read_diagnostics(input.diagnostics_path, input.project_root)
        .context("read analyzer diagnostics")?;

    let domain_report =
        strictuse_domain::evaluate(&diagnostics, &analysis.report_filter(), effective);
    let strictuse_domain::report::DomainReport {
        verdict: status,
        findings,
        counts,
        data,
    } = domain_report;
    debug!(
        total = data.diagnostics_total,
        suppressed = data.diagnostics_suppressed,
        emitted = data.findings_emitted,
        "diagnostics evaluated"
    );

    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            ended_at: Some(finished_at),
            duration_ms: Some(duration_ms),
        },
        verdict: Verdict {
            status,
            counts: VerdictCounts {
                info: counts.info,
                warn: counts.warning,
                error: counts.error,
                suppressed: data.diagnostics_suppressed,
            },
            reasons: Vec::new(),
        },
        findings,
        data: StrictUseData {
            profile: effective.profile.clone(),
            packages: analysis.packages.clone(),
            namespaces: analysis.namespaces.clone(),
            diagnostics_total: data.diagnostics_total,
            diagnostics_suppressed: data.diagnostics_suppressed,
            findings_total: data.findings_total,
            findings_emitted: data.findings_emitted,
            truncated_reason: data.truncated_reason,
        },
    };

    Ok(CheckOutput {
        plan: PlanOutcome::Analyze(analysis),
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn/skip, 2 = fail.
pub fn verdict_exit_code(status: VerdictStatus) -> i32 {
    match status {
        VerdictStatus::Pass => 0,
        VerdictStatus::Warn => 0,
        VerdictStatus::Skip => 0,
        VerdictStatus::Fail => 2,
    }
}
