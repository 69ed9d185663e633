use std::collections::BTreeSet;

use camino::Utf8Path;
use strictuse_types::PackageSummary;

use crate::autoload::AutoloadRules;
use crate::lock::PackageDefinition;

/// An installed dependency, with autoload rules rooted at its installation directory.
#[derive(Clone, Debug)]
pub struct Package {
    name: String,
    autoload: AutoloadRules,
    dependencies: BTreeSet<String>,
}

impl Package {
    pub(crate) fn from_definition(definition: &PackageDefinition, installation_path: &Utf8Path) -> Self {
        Self {
            name: definition.name.clone(),
            autoload: AutoloadRules::from_definition(&definition.autoload, installation_path),
            dependencies: definition.require.iter().cloned().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn autoload(&self) -> &AutoloadRules {
        &self.autoload
    }

    /// Exact, case-sensitive membership of `sentinel` among the declared dependencies.
    pub fn requires_strict_checks(&self, sentinel: &str) -> bool {
        self.dependencies.contains(sentinel)
    }

    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            name: self.name.clone(),
            namespaces: self.autoload.namespaces(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::parse_lock;

    fn package(json: &str) -> Package {
        let lock = parse_lock(&format!(r#"{{"packages": [{json}]}}"#)).expect("parse lock");
        Package::from_definition(&lock.packages[0], Utf8Path::new("/project/vendor/x"))
    }

    #[test]
    fn sentinel_dependency_marks_package() {
        let pkg = package(
            r#"{"name": "a/b", "require": {"php": "^8", "roave/you-are-using-it-wrong": "^1"}}"#,
        );
        assert!(pkg.requires_strict_checks("roave/you-are-using-it-wrong"));
        assert!(!pkg.requires_strict_checks("Roave/You-Are-Using-It-Wrong"));
    }

    #[test]
    fn package_without_require_is_not_marked() {
        let pkg = package(r#"{"name": "a/b"}"#);
        assert!(!pkg.requires_strict_checks("roave/you-are-using-it-wrong"));
    }

    #[test]
    fn summary_carries_namespaces() {
        let pkg = package(r#"{"name": "a/b", "autoload": {"psr-4": {"A\\B\\": "src"}}}"#);
        let summary = pkg.summary();
        assert_eq!(summary.name, "a/b");
        assert_eq!(summary.namespaces, vec!["A\\B\\"]);
        assert_eq!(pkg.name(), "a/b");
    }
}
