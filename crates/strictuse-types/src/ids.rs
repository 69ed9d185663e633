//! Stable identifiers: well-known package and file names, plus reason codes.
//!
//! Reason codes are short snake_case tokens.

/// Package whose presence among another package's `require` entries opts that
/// package into strict usage checks.
pub const SENTINEL_PACKAGE: &str = "roave/you-are-using-it-wrong";

/// Name printed in front of every console line.
pub const TOOL_NAME: &str = "strictuse";

// Host package manager files.
pub const ROOT_MANIFEST: &str = "composer.json";
pub const LOCK_FILE: &str = "composer.lock";
pub const VENDOR_DIR: &str = "vendor";

// Analyzer configuration files. Either one means the project runs its own analysis.
pub const ANALYZER_CONFIG: &str = "psalm.xml";
pub const ANALYZER_CONFIG_DIST: &str = "psalm.xml.dist";

// Verdict reasons
pub const REASON_NOT_ENFORCED: &str = "not_enforced";
pub const REASON_OWN_ANALYZER_CONFIG: &str = "own_analyzer_config";
pub const REASON_RUNTIME_ERROR: &str = "runtime_error";

// Tool-level finding code
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
