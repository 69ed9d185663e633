use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use strictuse_types::ids::{ANALYZER_CONFIG, ANALYZER_CONFIG_DIST, LOCK_FILE, ROOT_MANIFEST};
use tracing::debug;

use crate::autoload::AutoloadRules;
use crate::lock::{LockData, RootManifest, parse_lock, parse_root_manifest};
use crate::strict_set::StrictCheckSet;

/// Everything known about the project being installed.
#[derive(Clone, Debug)]
pub struct ProjectContext {
    project_root: Utf8PathBuf,
    root_autoload: AutoloadRules,
    strict_checks: StrictCheckSet,
    enforcement_active: bool,
}

impl ProjectContext {
    /// Assemble the context from already-parsed root metadata and lock data.
    ///
    /// The root package's autoload rules are rooted at `project_root` itself.
    pub fn from_installation_context(
        root: &RootManifest,
        lock: &LockData,
        project_root: &Utf8Path,
        sentinel: &str,
    ) -> Self {
        let enforcement_active = lock.contains_package(sentinel);
        debug!(%project_root, enforcement_active, "project context assembled");
        Self {
            project_root: project_root.to_path_buf(),
            root_autoload: AutoloadRules::from_definition(&root.autoload, project_root),
            strict_checks: StrictCheckSet::from_lock(lock, project_root, sentinel),
            enforcement_active,
        }
    }

    /// Read the root manifest and lock file found directly under `project_root`.
    pub fn load(project_root: &Utf8Path, sentinel: &str) -> anyhow::Result<Self> {
        let manifest_path = project_root.join(ROOT_MANIFEST);
        let manifest_text = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("read {manifest_path}"))?;
        let root = parse_root_manifest(&manifest_text)
            .with_context(|| format!("parse {manifest_path}"))?;

        let lock_path = project_root.join(LOCK_FILE);
        let lock_text =
            std::fs::read_to_string(&lock_path).with_context(|| format!("read {lock_path}"))?;
        let lock = parse_lock(&lock_text).with_context(|| format!("parse {lock_path}"))?;

        Ok(Self::from_installation_context(
            &root,
            &lock,
            project_root,
            sentinel,
        ))
    }

    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    pub fn root_autoload(&self) -> &AutoloadRules {
        &self.root_autoload
    }

    pub fn strict_checks(&self) -> &StrictCheckSet {
        &self.strict_checks
    }

    /// Whether the sentinel package itself is installed, as production or development dependency.
    pub fn enforcement_active(&self) -> bool {
        self.enforcement_active
    }

    /// Whether the project ships its own analyzer configuration.
    ///
    /// Checked against the filesystem on every call.
    pub fn already_has_own_analyzer_configuration(&self) -> bool {
        [ANALYZER_CONFIG, ANALYZER_CONFIG_DIST]
            .iter()
            .any(|name| self.project_root.join(name).is_file())
    }
}
