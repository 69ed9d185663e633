use strictuse_types::{DiagnosticKind, Location};

/// One diagnostic as produced by the external analyzer, before filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Class name, `Class$property`, `Class::method` or function id, depending on `kind`.
    pub subject: Option<String>,
    /// Analyzer issue type, e.g. `InvalidArgument`.
    pub issue_type: String,
    pub message: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    /// The identifier compared against namespace prefixes, when this kind carries one.
    pub fn checked_subject(&self) -> Option<&str> {
        if !self.kind.has_checked_subject() {
            return None;
        }
        self.subject.as_deref()
    }
}
