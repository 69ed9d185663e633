use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What an analyzer diagnostic is about, which decides how its subject is read.
///
/// | kind | subject shape |
/// |---|---|
/// | `class` | `Vendor\Package\Class` |
/// | `property` | `Vendor\Package\Class$property` |
/// | `method` | `Vendor\Package\Class::method` |
/// | `function` / `argument` | `Vendor\Package\function` (may be absent) |
///
/// Anything else deserializes as `other` and never carries a checked subject.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Class,
    Property,
    Method,
    Function,
    Argument,
    #[default]
    #[serde(other)]
    Other,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::Class => "class",
            DiagnosticKind::Property => "property",
            DiagnosticKind::Method => "method",
            DiagnosticKind::Function => "function",
            DiagnosticKind::Argument => "argument",
            DiagnosticKind::Other => "other",
        }
    }

    /// Kinds whose subject identifies an API that belongs to some namespace.
    pub fn has_checked_subject(self) -> bool {
        !matches!(self, DiagnosticKind::Other)
    }
}
