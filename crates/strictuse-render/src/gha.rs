use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report.findings.iter().map(annotation).collect()
}

fn annotation(f: &crate::RenderableFinding) -> String {
    let level = match f.severity {
        RenderableSeverity::Error => "error",
        RenderableSeverity::Warning => "warning",
        RenderableSeverity::Info => "notice",
    };

    let mut meta = String::new();
    if let Some(loc) = &f.location {
        meta.push_str(&format!("file={}", escape_property(&loc.path)));
        if let Some(line) = loc.line {
            meta.push_str(&format!(",line={line}"));
        }
        if let Some(col) = loc.col {
            meta.push_str(&format!(",col={col}"));
        }
    }

    let message = match &f.subject {
        Some(subject) => format!("[strictuse:{}] {} ({})", f.code, f.message, subject),
        None => format!("[strictuse:{}] {}", f.code, f.message),
    };
    let message = escape_data(&message);

    if meta.is_empty() {
        format!("::{level}::{message}")
    } else {
        format!("::{level} {meta}::{message}")
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
