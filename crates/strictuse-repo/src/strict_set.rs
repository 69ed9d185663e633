use camino::{Utf8Path, Utf8PathBuf};
use strictuse_types::PackageSummary;
use strictuse_types::ids::VENDOR_DIR;
use tracing::debug;

use crate::autoload::rooted;
use crate::lock::LockData;
use crate::package::Package;

/// Installed packages that declare the sentinel dependency, in lock file order.
#[derive(Clone, Debug, Default)]
pub struct StrictCheckSet {
    packages: Vec<Package>,
}

impl StrictCheckSet {
    pub fn from_lock(lock: &LockData, project_root: &Utf8Path, sentinel: &str) -> Self {
        let packages: Vec<Package> = lock
            .all_packages()
            .map(|def| Package::from_definition(def, &installation_path(project_root, &def.name)))
            .filter(|pkg| pkg.requires_strict_checks(sentinel))
            .collect();
        debug!(count = packages.len(), sentinel, "strictly checked packages selected");
        Self { packages }
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Names of the packages whose usages must be type-checked.
    pub fn checked_package_names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name().to_string()).collect()
    }

    /// Namespace prefixes of all selected packages, concatenated in package order.
    pub fn checked_namespaces(&self) -> Vec<String> {
        self.packages
            .iter()
            .flat_map(|p| p.autoload().namespaces())
            .collect()
    }

    pub fn summaries(&self) -> Vec<PackageSummary> {
        self.packages.iter().map(Package::summary).collect()
    }
}

/// `<project_root>/vendor/<name>`.
pub fn installation_path(project_root: &Utf8Path, name: &str) -> Utf8PathBuf {
    rooted(project_root, &format!("{VENDOR_DIR}/{name}"))
}
