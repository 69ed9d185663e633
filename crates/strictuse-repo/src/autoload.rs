use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::lock::{AutoloadDefinition, PrefixRule};

/// A package's declared source locations, rooted at its installation directory.
///
/// Only rooted paths are stored. Existence is checked when the lists are read, so the
/// same value reflects later changes on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoloadRules {
    prefix_style: Vec<RootedPrefix>,
    hierarchical_style: Vec<RootedPrefix>,
    class_map: Vec<Utf8PathBuf>,
    explicit_files: Vec<Utf8PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct RootedPrefix {
    prefix: String,
    paths: Vec<Utf8PathBuf>,
}

#[derive(Clone, Copy, Debug)]
enum PathKind {
    Directory,
    File,
}

impl PathKind {
    fn matches(self, path: &Utf8Path) -> bool {
        match self {
            PathKind::Directory => path.is_dir(),
            PathKind::File => path.is_file(),
        }
    }
}

impl AutoloadRules {
    pub fn from_definition(definition: &AutoloadDefinition, package_root: &Utf8Path) -> Self {
        Self {
            prefix_style: root_prefix_rules(&definition.psr4, package_root),
            hierarchical_style: root_prefix_rules(&definition.psr0, package_root),
            class_map: root_paths(&definition.classmap, package_root),
            explicit_files: root_paths(&definition.files, package_root),
        }
    }

    /// Existing directories: class-map entries, then hierarchical rules, then prefix rules.
    pub fn directories(&self) -> Vec<Utf8PathBuf> {
        let candidates = self
            .class_map
            .iter()
            .chain(self.hierarchical_style.iter().flat_map(|r| r.paths.iter()))
            .chain(self.prefix_style.iter().flat_map(|r| r.paths.iter()));
        existing(candidates, PathKind::Directory)
    }

    /// Existing files: class-map entries, then explicit file entries.
    pub fn files(&self) -> Vec<Utf8PathBuf> {
        let candidates = self.class_map.iter().chain(self.explicit_files.iter());
        existing(candidates, PathKind::File)
    }

    /// Declared namespace prefixes, prefix-style rules first. Duplicates are kept.
    pub fn namespaces(&self) -> Vec<String> {
        self.prefix_style
            .iter()
            .chain(self.hierarchical_style.iter())
            .map(|r| r.prefix.clone())
            .collect()
    }
}

/// `root` joined to `path` by a separator, even when `path` is empty or absolute.
pub(crate) fn rooted(root: &Utf8Path, path: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{root}/{path}"))
}

fn root_paths(paths: &[String], root: &Utf8Path) -> Vec<Utf8PathBuf> {
    paths.iter().map(|p| rooted(root, p)).collect()
}

fn root_prefix_rules(rules: &[PrefixRule], root: &Utf8Path) -> Vec<RootedPrefix> {
    rules
        .iter()
        .map(|rule| RootedPrefix {
            prefix: rule.prefix.clone(),
            paths: root_paths(&rule.paths, root),
        })
        .collect()
}

fn existing<'a>(
    candidates: impl Iterator<Item = &'a Utf8PathBuf>,
    kind: PathKind,
) -> Vec<Utf8PathBuf> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for candidate in candidates {
        if !kind.matches(candidate) {
            debug!(path = %candidate, ?kind, "autoload path skipped");
            continue;
        }
        match candidate.canonicalize_utf8() {
            Ok(canonical) => {
                if seen.insert(canonical.clone()) {
                    out.push(canonical);
                }
            }
            Err(err) => debug!(path = %candidate, error = %err, "autoload path not canonicalizable"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf())
            .expect("utf8 temp dir")
            .canonicalize_utf8()
            .expect("canonical temp dir")
    }

    fn mkdir(root: &Utf8Path, rel: &str) {
        fs::create_dir_all(root.join(rel)).expect("create dir");
    }

    fn touch(root: &Utf8Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, "<?php\n").expect("write file");
    }

    fn rules(value: serde_json::Value, root: &Utf8Path) -> AutoloadRules {
        AutoloadRules::from_definition(&AutoloadDefinition::from_value(&value), root)
    }

    #[test]
    fn directories_follow_classmap_then_hierarchical_then_prefix_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        for dir in ["psr4", "psr0", "classmap"] {
            mkdir(&root, dir);
        }

        let rules = rules(
            json!({
                "psr-4": {"A\\": "psr4"},
                "psr-0": {"B_": "psr0"},
                "classmap": ["classmap"],
            }),
            &root,
        );

        assert_eq!(
            rules.directories(),
            vec![root.join("classmap"), root.join("psr0"), root.join("psr4")]
        );
    }

    #[test]
    fn missing_paths_are_omitted() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        mkdir(&root, "src");

        let rules = rules(
            json!({
                "psr-4": {"A\\": ["src", "gone"]},
                "files": ["missing.php"],
            }),
            &root,
        );

        assert_eq!(rules.directories(), vec![root.join("src")]);
        assert!(rules.files().is_empty());
    }

    #[test]
    fn classmap_entries_split_by_kind() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        mkdir(&root, "classes");
        touch(&root, "Single.php");
        touch(&root, "helpers.php");

        let rules = rules(
            json!({
                "classmap": ["classes", "Single.php"],
                "files": ["helpers.php"],
            }),
            &root,
        );

        assert_eq!(rules.directories(), vec![root.join("classes")]);
        assert_eq!(
            rules.files(),
            vec![root.join("Single.php"), root.join("helpers.php")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn dangling_classmap_symlink_is_neither_file_nor_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root, "Real.php");
        std::os::unix::fs::symlink(root.join("nowhere"), root.join("broken"))
            .expect("create symlink");

        let rules = rules(json!({"classmap": ["broken", "Real.php"]}), &root);

        assert!(rules.directories().is_empty());
        assert_eq!(rules.files(), vec![root.join("Real.php")]);
    }

    #[test]
    fn prefix_rule_files_are_not_directories() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root, "not-a-dir.php");

        let rules = rules(json!({"psr-4": {"A\\": "not-a-dir.php"}}), &root);
        assert!(rules.directories().is_empty());
    }

    #[test]
    fn aliases_of_the_same_directory_collapse() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        mkdir(&root, "src");

        let rules = rules(
            json!({
                "psr-4": {"A\\": ["src", "./src", "src/../src"]},
                "psr-0": {"A_": "src"},
            }),
            &root,
        );

        assert_eq!(rules.directories(), vec![root.join("src")]);
    }

    #[test]
    fn empty_path_resolves_to_package_root() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let rules = rules(json!({"psr-4": {"A\\": ""}}), &root);
        assert_eq!(rules.directories(), vec![root.clone()]);
    }

    #[test]
    fn absolute_looking_paths_stay_under_the_root() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        mkdir(&root, "tmp");

        // "/tmp" must resolve to "<root>//tmp", never to the system temp dir.
        let rules = rules(json!({"classmap": ["/tmp"]}), &root);
        assert_eq!(rules.directories(), vec![root.join("tmp")]);
    }

    #[test]
    fn namespaces_list_prefix_style_first_and_keep_duplicates() {
        let root = Utf8Path::new("/nowhere");
        let rules = rules(
            json!({
                "psr-0": {"Legacy_": "lib", "Shared\\": "lib"},
                "psr-4": {"Modern\\": "src", "Shared\\": "src"},
            }),
            root,
        );

        assert_eq!(
            rules.namespaces(),
            vec!["Modern\\", "Shared\\", "Legacy_", "Shared\\"]
        );
    }

    #[test]
    fn namespaces_do_not_depend_on_disk() {
        let rules = rules(
            json!({"psr-4": {"Ghost\\": "does-not-exist"}}),
            Utf8Path::new("/nowhere"),
        );
        assert_eq!(rules.namespaces(), vec!["Ghost\\"]);
        assert!(rules.directories().is_empty());
    }

    #[test]
    fn empty_definition_yields_nothing() {
        let rules = AutoloadRules::default();
        assert!(rules.directories().is_empty());
        assert!(rules.files().is_empty());
        assert!(rules.namespaces().is_empty());
    }

    #[test]
    fn rooted_joins_with_separator() {
        assert_eq!(rooted(Utf8Path::new("/a"), "b"), Utf8PathBuf::from("/a/b"));
        assert_eq!(rooted(Utf8Path::new("/a"), ""), Utf8PathBuf::from("/a/"));
        assert_eq!(rooted(Utf8Path::new("/a"), "/b"), Utf8PathBuf::from("/a//b"));
    }
}
