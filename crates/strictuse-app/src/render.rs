//! Render use cases: console lines, markdown and GitHub annotations.

use strictuse_render::{RenderablePackage, RenderableReport, RenderableSkip};

use crate::plan::{PlanOutcome, SkipReason};

pub fn render_markdown(report: &RenderableReport) -> String {
    strictuse_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    strictuse_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

/// Console lines for the findings that survived filtering, in report order.
pub fn render_finding_lines(report: &RenderableReport) -> Vec<String> {
    report
        .findings
        .iter()
        .map(strictuse_render::render_finding_line)
        .collect()
}

pub fn render_done_line() -> String {
    strictuse_render::render_done_line()
}

/// Console lines announcing a plan: the single skip line, or the start line and package list.
pub fn render_plan_lines(outcome: &PlanOutcome) -> Vec<String> {
    match outcome {
        PlanOutcome::Skipped(reason) => {
            let skip = match reason {
                SkipReason::NotEnforced => RenderableSkip::NotEnforced,
                SkipReason::OwnAnalyzerConfig => RenderableSkip::OwnAnalyzerConfig,
            };
            vec![strictuse_render::render_skip_line(skip)]
        }
        PlanOutcome::Analyze(plan) => {
            let packages: Vec<RenderablePackage> = plan
                .packages
                .iter()
                .map(|p| RenderablePackage {
                    name: p.name.clone(),
                    namespaces: p.namespaces.clone(),
                })
                .collect();
            let mut lines = vec![strictuse_render::render_start_line()];
            lines.extend(strictuse_render::render_package_lines(&packages));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::AnalysisPlan;
    use strictuse_render::{
        RenderableData, RenderableFinding, RenderableSeverity, RenderableVerdictStatus,
    };
    use strictuse_types::PackageSummary;

    fn sample_report() -> RenderableReport {
        let finding = |code: &str| RenderableFinding {
            severity: RenderableSeverity::Warning,
            code: code.to_string(),
            subject: None,
            message: "bad".to_string(),
            location: None,
        };
        RenderableReport {
            verdict: RenderableVerdictStatus::Warn,
            reasons: Vec::new(),
            findings: vec![finding("A"), finding("B")],
            data: RenderableData {
                packages: Vec::new(),
                diagnostics_suppressed: 0,
                findings_emitted: 2,
                findings_total: 2,
                truncated_reason: None,
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let annotations = render_annotations(&sample_report(), 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        assert!(render_markdown(&sample_report()).contains("Verdict: **WARN**"));
    }

    #[test]
    fn finding_lines_follow_report_order() {
        let lines = render_finding_lines(&sample_report());
        assert_eq!(lines, vec!["WARNING A: bad", "WARNING B: bad"]);
    }

    #[test]
    fn plan_lines_for_skip_are_a_single_line() {
        let lines = render_plan_lines(&PlanOutcome::Skipped(SkipReason::NotEnforced));
        assert_eq!(
            lines,
            vec!["strictuse: plugin not installed locally - skipping type checks..."]
        );
    }

    #[test]
    fn plan_lines_list_packages_after_start_line() {
        let outcome = PlanOutcome::Analyze(AnalysisPlan {
            directories: Vec::new(),
            files: Vec::new(),
            namespaces: vec!["Foo\\Bar\\".to_string()],
            packages: vec![PackageSummary {
                name: "foo/bar".to_string(),
                namespaces: vec!["Foo\\Bar\\".to_string()],
            }],
        });

        assert_eq!(
            render_plan_lines(&outcome),
            vec![
                "strictuse: checking strictly type-checked packages...",
                "strictuse: following package usages will be checked:",
                " - foo/bar",
                " - - Foo\\Bar\\",
            ]
        );
    }
}
