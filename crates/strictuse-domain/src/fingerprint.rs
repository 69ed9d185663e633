use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a reported diagnostic.
///
/// Identity fields:
/// - issue type
/// - diagnostic kind
/// - subject (if present)
/// - location path and line (if present)
pub fn fingerprint_for_diagnostic(
    issue_type: &str,
    kind: &str,
    subject: Option<&str>,
    path: Option<&str>,
    line: Option<u32>,
) -> String {
    let line = line.map(|l| l.to_string());
    let parts = [
        issue_type,
        kind,
        subject.unwrap_or(""),
        path.unwrap_or(""),
        line.as_deref().unwrap_or(""),
    ];
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
