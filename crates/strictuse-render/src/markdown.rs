use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# strictuse report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
        RenderableVerdictStatus::Skip => "SKIP",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Findings: {} (emitted) / {} (total)\n- Suppressed diagnostics: {}\n",
        verdict,
        report.data.findings_emitted,
        report.data.findings_total,
        report.data.diagnostics_suppressed
    ));
    if !report.reasons.is_empty() {
        out.push_str(&format!("- Reasons: {}\n", report.reasons.join(", ")));
    }
    out.push('\n');

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if !report.data.packages.is_empty() {
        out.push_str("## Strictly checked packages\n\n");
        for p in &report.data.packages {
            if p.namespaces.is_empty() {
                out.push_str(&format!("- `{}`\n", p.name));
            } else {
                let namespaces: Vec<String> =
                    p.namespaces.iter().map(|ns| format!("`{ns}`")).collect();
                out.push_str(&format!("- `{}`: {}\n", p.name, namespaces.join(", ")));
            }
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        let mut line = format!("- [{}] `{}`", sev, f.code);
        if let Some(subject) = &f.subject {
            line.push_str(&format!(" on `{subject}`"));
        }
        line.push_str(&format!(": {}", f.message));
        if let Some(loc) = &f.location {
            match loc.line {
                Some(n) => line.push_str(&format!(" (`{}`:{})", loc.path, n)),
                None => line.push_str(&format!(" (`{}`)", loc.path)),
            }
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableLocation, RenderablePackage};

    fn data(emitted: u32, total: u32) -> RenderableData {
        RenderableData {
            packages: Vec::new(),
            diagnostics_suppressed: 0,
            findings_emitted: emitted,
            findings_total: total,
            truncated_reason: None,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            reasons: Vec::new(),
            findings: Vec::new(),
            data: data(0, 0),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No findings"));
        assert!(!md.contains("Reasons"));
    }

    #[test]
    fn renders_findings_packages_and_truncation() {
        let mut d = data(1, 2);
        d.truncated_reason = Some("findings truncated to max_findings=1".to_string());
        d.diagnostics_suppressed = 5;
        d.packages = vec![RenderablePackage {
            name: "foo/bar".to_string(),
            namespaces: vec!["Foo\\Bar\\".to_string()],
        }];
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            reasons: Vec::new(),
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                code: "InvalidArgument".to_string(),
                subject: Some("Foo\\Bar::baz".to_string()),
                message: "wrong type".to_string(),
                location: Some(RenderableLocation {
                    path: "src/App.php".to_string(),
                    line: Some(7),
                    col: None,
                }),
            }],
            data: d,
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("Suppressed diagnostics: 5"));
        assert!(md.contains("> Note: findings truncated"));
        assert!(md.contains("- `foo/bar`: `Foo\\Bar\\`"));
        assert!(md.contains("- [ERROR] `InvalidArgument` on `Foo\\Bar::baz`: wrong type (`src/App.php`:7)"));
    }

    #[test]
    fn renders_skip_reasons() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Skip,
            reasons: vec!["own_analyzer_config".to_string()],
            findings: Vec::new(),
            data: data(0, 0),
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **SKIP**"));
        assert!(md.contains("Reasons: own_analyzer_config"));
    }
}
