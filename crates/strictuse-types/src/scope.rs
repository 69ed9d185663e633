use crate::receipt::PackageSummary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_SCOPE_V1: &str = "strictuse.scope.v1";

/// What the external analyzer has to look at, and which namespaces it has to care about.
///
/// `directories` and `files` are the consuming project's own source roots (canonical,
/// absolute). `namespaces` are the prefixes whose usages are reported; every other
/// diagnostic is suppressed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisScope {
    pub schema: String,
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub namespaces: Vec<String>,
    pub packages: Vec<PackageSummary>,
}
