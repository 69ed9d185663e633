use crate::{model::StrictUseConfigV1, presets};
use anyhow::Context;
use strictuse_domain::policy::{EffectiveConfig, FailOn, ReportingLevel};
use strictuse_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: StrictUseConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    if let Some(sentinel) = cfg.sentinel.as_deref() {
        let sentinel = sentinel.trim();
        if sentinel.is_empty() {
            anyhow::bail!("sentinel must not be empty");
        }
        effective.sentinel = sentinel.to_string();
    }

    // per-issue overrides
    for (issue_type, ic) in cfg.issues.iter() {
        if let Some(level) = ic.level.as_deref() {
            let level = parse_level(level)
                .with_context(|| format!("invalid level for issue {issue_type}"))?;
            effective.issues.insert(issue_type.clone(), level);
        }
    }

    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_level(v: &str) -> anyhow::Result<ReportingLevel> {
    match v {
        "suppress" => Ok(ReportingLevel::Suppress),
        "info" => Ok(ReportingLevel::Report(Severity::Info)),
        "warning" | "warn" => Ok(ReportingLevel::Report(Severity::Warning)),
        "error" => Ok(ReportingLevel::Report(Severity::Error)),
        other => anyhow::bail!("unknown level: {other} (expected error|warning|info|suppress)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
