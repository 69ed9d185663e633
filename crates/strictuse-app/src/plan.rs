//! The `plan` use case: decide whether to analyze, and what.

use camino::{Utf8Path, Utf8PathBuf};
use strictuse_domain::ReportFilter;
use strictuse_repo::ProjectContext;
use strictuse_types::{AnalysisScope, PackageSummary, SCHEMA_SCOPE_V1, ids};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The sentinel package is not installed in this project.
    NotEnforced,
    /// The project ships its own analyzer configuration and runs the analyzer itself.
    OwnAnalyzerConfig,
}

impl SkipReason {
    pub fn code(self) -> &'static str {
        match self {
            SkipReason::NotEnforced => ids::REASON_NOT_ENFORCED,
            SkipReason::OwnAnalyzerConfig => ids::REASON_OWN_ANALYZER_CONFIG,
        }
    }
}

/// What the analyzer has to look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisPlan {
    /// The project's own source directories.
    pub directories: Vec<Utf8PathBuf>,
    /// The project's own explicit source files.
    pub files: Vec<Utf8PathBuf>,
    /// Namespace prefixes of every strictly checked package, in package order.
    pub namespaces: Vec<String>,
    pub packages: Vec<PackageSummary>,
}

impl AnalysisPlan {
    pub fn report_filter(&self) -> ReportFilter {
        ReportFilter::new(self.namespaces.clone())
    }

    pub fn to_scope(&self) -> AnalysisScope {
        AnalysisScope {
            schema: SCHEMA_SCOPE_V1.to_string(),
            directories: self.directories.iter().map(|d| d.to_string()).collect(),
            files: self.files.iter().map(|f| f.to_string()).collect(),
            namespaces: self.namespaces.clone(),
            packages: self.packages.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    Skipped(SkipReason),
    Analyze(AnalysisPlan),
}

/// Apply the short-circuit conditions in order, then collect the analysis scope.
pub fn plan_for(ctx: &ProjectContext) -> PlanOutcome {
    if !ctx.enforcement_active() {
        info!(reason = ids::REASON_NOT_ENFORCED, "analysis skipped");
        return PlanOutcome::Skipped(SkipReason::NotEnforced);
    }
    if ctx.already_has_own_analyzer_configuration() {
        info!(reason = ids::REASON_OWN_ANALYZER_CONFIG, "analysis skipped");
        return PlanOutcome::Skipped(SkipReason::OwnAnalyzerConfig);
    }

    let strict = ctx.strict_checks();
    let plan = AnalysisPlan {
        directories: ctx.root_autoload().directories(),
        files: ctx.root_autoload().files(),
        namespaces: strict.checked_namespaces(),
        packages: strict.summaries(),
    };
    info!(
        packages = plan.packages.len(),
        namespaces = plan.namespaces.len(),
        directories = plan.directories.len(),
        files = plan.files.len(),
        "analysis planned"
    );
    PlanOutcome::Analyze(plan)
}

/// Load the project found at `project_root` and plan its analysis.
pub fn run_plan(project_root: &Utf8Path, sentinel: &str) -> anyhow::Result<PlanOutcome> {
    let ctx = ProjectContext::load(project_root, sentinel)?;
    Ok(plan_for(&ctx))
}
