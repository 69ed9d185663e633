//! Lock file and root manifest DTOs.
//!
//! Only the parts needed for classification are modelled. Optional sections with an
//! unexpected shape (PHP serializes empty maps as `[]`) degrade to empty values.

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The resolved dependency graph as recorded in the lock file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LockData {
    #[serde(default, deserialize_with = "optional_list")]
    pub packages: Vec<PackageDefinition>,
    #[serde(rename = "packages-dev", default, deserialize_with = "optional_list")]
    pub packages_dev: Vec<PackageDefinition>,
}

impl LockData {
    /// Production entries followed by development entries, each in lock file order.
    pub fn all_packages(&self) -> impl Iterator<Item = &PackageDefinition> {
        self.packages.iter().chain(self.packages_dev.iter())
    }

    pub fn contains_package(&self, name: &str) -> bool {
        self.all_packages().any(|p| p.name == name)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PackageDefinition {
    pub name: String,
    /// Names of declared dependencies. Version constraints are irrelevant here.
    #[serde(default, deserialize_with = "dependency_names")]
    pub require: Vec<String>,
    #[serde(default, deserialize_with = "autoload_definition")]
    pub autoload: AutoloadDefinition,
}

/// Root project manifest. Only the autoload section is consumed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RootManifest {
    #[serde(default, deserialize_with = "autoload_definition")]
    pub autoload: AutoloadDefinition,
}

/// Declared source locations, still relative to the package root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoloadDefinition {
    /// `psr-4` rules.
    pub psr4: Vec<PrefixRule>,
    /// `psr-0` rules.
    pub psr0: Vec<PrefixRule>,
    pub classmap: Vec<String>,
    pub files: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: String,
    pub paths: Vec<String>,
}

impl AutoloadDefinition {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            psr4: prefix_rules(obj.get("psr-4")),
            psr0: prefix_rules(obj.get("psr-0")),
            classmap: path_list(obj.get("classmap")),
            files: path_list(obj.get("files")),
        }
    }
}

pub fn parse_lock(text: &str) -> anyhow::Result<LockData> {
    serde_json::from_str(text).context("parse lock file")
}

pub fn parse_root_manifest(text: &str) -> anyhow::Result<RootManifest> {
    serde_json::from_str(text).context("parse root manifest")
}

fn prefix_rules(value: Option<&Value>) -> Vec<PrefixRule> {
    let Some(map) = value.and_then(Value::as_object) else {
        return Vec::new();
    };
    map.iter()
        .map(|(prefix, paths)| PrefixRule {
            prefix: prefix.clone(),
            paths: path_list(Some(paths)),
        })
        .collect()
}

/// A single path string or a list of them.
fn path_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(path_string).collect(),
        Some(other) => path_string(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn path_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_list<'de, D>(deserializer: D) -> Result<Vec<PackageDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PackageDefinition>>::deserialize(deserializer)?.unwrap_or_default())
}

fn dependency_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_object()
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default())
}

fn autoload_definition<'de, D>(deserializer: D) -> Result<AutoloadDefinition, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(AutoloadDefinition::from_value(&value))
}
