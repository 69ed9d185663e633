//! Analyzer output ingestion.
//!
//! Accepts either a bare JSON array of diagnostics or an object with a `diagnostics` array.

use anyhow::Context;
use camino::Utf8Path;
use serde::Deserialize;
use strictuse_domain::model::Diagnostic;
use strictuse_types::{DiagnosticKind, Location, RepoPath};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum DiagnosticsDocument {
    List(Vec<RawDiagnostic>),
    Wrapped { diagnostics: Vec<RawDiagnostic> },
}

#[derive(Deserialize)]
struct RawDiagnostic {
    #[serde(default)]
    kind: DiagnosticKind,
    #[serde(default)]
    subject: Option<String>,
    issue_type: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    column: Option<u32>,
}

/// Parse analyzer diagnostics. Absolute file paths under `project_root` become relative.
pub fn parse_diagnostics(text: &str, project_root: &Utf8Path) -> anyhow::Result<Vec<Diagnostic>> {
    let doc: DiagnosticsDocument =
        serde_json::from_str(text).context("parse analyzer diagnostics")?;
    let raw = match doc {
        DiagnosticsDocument::List(items) => items,
        DiagnosticsDocument::Wrapped { diagnostics } => diagnostics,
    };
    Ok(raw
        .into_iter()
        .map(|d| into_diagnostic(d, project_root))
        .collect())
}

/// Read and parse an analyzer output file.
pub fn read_diagnostics(path: &Utf8Path, project_root: &Utf8Path) -> anyhow::Result<Vec<Diagnostic>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let diagnostics = parse_diagnostics(&text, project_root).with_context(|| format!("parse {path}"))?;
    debug!(%path, count = diagnostics.len(), "analyzer diagnostics read");
    Ok(diagnostics)
}

fn into_diagnostic(raw: RawDiagnostic, project_root: &Utf8Path) -> Diagnostic {
    let location = raw.file.filter(|f| !f.is_empty()).map(|file| Location {
        path: RepoPath::from_project_path(project_root, &file),
        line: raw.line,
        col: raw.column,
    });
    Diagnostic {
        kind: raw.kind,
        // An empty subject is an anonymous one.
        subject: raw.subject.filter(|s| !s.is_empty()),
        issue_type: raw.issue_type,
        message: raw.message,
        location,
    }
}
