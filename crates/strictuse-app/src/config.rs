use anyhow::Context;
use strictuse_settings::{Overrides, ResolvedConfig, StrictUseConfigV1};

/// Parse and resolve `strictuse.toml` contents. Empty text means defaults.
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        StrictUseConfigV1::default()
    } else {
        strictuse_settings::parse_config_toml(config_text).context("parse config")?
    };
    strictuse_settings::resolve_config(cfg, overrides).context("resolve config")
}
