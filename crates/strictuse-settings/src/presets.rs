use strictuse_domain::policy::{EffectiveConfig, FailOn, ReportingLevel};
use strictuse_types::{Severity, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into project config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "audit" => audit_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    base("strict", FailOn::Error, Severity::Error)
}

fn warn_profile() -> EffectiveConfig {
    base("warn", FailOn::Warning, Severity::Warning)
}

fn audit_profile() -> EffectiveConfig {
    // Reports everything it finds, never fails the install.
    base("audit", FailOn::Error, Severity::Info)
}

fn base(profile: &str, fail_on: FailOn, default_severity: Severity) -> EffectiveConfig {
    EffectiveConfig {
        profile: profile.to_string(),
        sentinel: ids::SENTINEL_PACKAGE.to_string(),
        fail_on,
        max_findings: 200,
        default_level: ReportingLevel::Report(default_severity),
        issues: BTreeMap::new(),
    }
}
