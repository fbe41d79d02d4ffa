//! # Repository Layout
//!
//! Classifies the immediate subdirectories of a CV repository checkout.
//! A directory with at least one `*.jsonld` file is a collection; one with
//! `*.json` files but no context is an orphan; anything else is ignored by
//! the checks. Hidden directories (`.git`, `.github`, ...) are skipped.
//!
//! Listings are sorted so that reports come out in a stable order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::LayoutError;
use crate::identity::TermId;

/// File-name suffix of JSON-LD context files.
pub const CONTEXT_SUFFIX: &str = ".jsonld";

/// File-name suffix of element files.
pub const ELEMENT_SUFFIX: &str = ".json";

/// Project specification file at the repository root.
pub const PROJECT_SPECS_FILE: &str = "project_specs.json";

/// Returns true for `*.jsonld` names.
pub fn is_context_file(name: &str) -> bool {
    name.ends_with(CONTEXT_SUFFIX)
}

/// Returns true for `*.json` names. `*.jsonld` never matches.
pub fn is_element_file(name: &str) -> bool {
    name.ends_with(ELEMENT_SUFFIX)
}

/// How a top-level directory was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    /// Has at least one context file.
    Collection,
    /// Has element files but no context file.
    Orphan,
    /// Neither; not a vocabulary directory.
    Plain,
}

/// Contents of one top-level directory, split by role.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    /// Directory name (also the collection name).
    pub name: String,
    /// Absolute or root-relative location of the directory.
    pub path: PathBuf,
    /// `*.jsonld` entries.
    pub context_files: Vec<PathBuf>,
    /// Every entry that is not a context file, subdirectories included.
    pub non_context_entries: Vec<PathBuf>,
    /// `*.json` entries (a subset of `non_context_entries`).
    pub element_files: Vec<PathBuf>,
}

impl DirectoryListing {
    /// List a directory and partition its entries.
    pub fn read(path: &Path) -> Result<Self, LayoutError> {
        let name = file_name(path);
        let mut context_files = Vec::new();
        let mut non_context_entries = Vec::new();
        let mut element_files = Vec::new();

        for entry_path in read_sorted(path)? {
            let entry_name = file_name(&entry_path);
            if is_context_file(&entry_name) {
                context_files.push(entry_path);
            } else {
                if is_element_file(&entry_name) {
                    element_files.push(entry_path.clone());
                }
                non_context_entries.push(entry_path);
            }
        }

        Ok(Self {
            name,
            path: path.to_path_buf(),
            context_files,
            non_context_entries,
            element_files,
        })
    }

    /// Collection if any context file exists, orphan if only element files do.
    pub fn kind(&self) -> DirectoryKind {
        if !self.context_files.is_empty() {
            DirectoryKind::Collection
        } else if !self.element_files.is_empty() {
            DirectoryKind::Orphan
        } else {
            DirectoryKind::Plain
        }
    }

    /// Term ids declared by the element files, in file order.
    ///
    /// An element whose `id` cannot be read is represented by its file stem.
    pub fn element_ids(&self) -> Vec<TermId> {
        self.element_files.iter().map(|p| read_element_id(p)).collect()
    }
}

/// Read the `id` of an element file, falling back to the file stem.
pub fn read_element_id(path: &Path) -> TermId {
    let from_content = std::fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .and_then(|value| value.get("id").and_then(|v| v.as_str()).map(str::to_string));

    match from_content {
        Some(id) => TermId(id),
        None => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::debug!(path = %path.display(), fallback = %stem, "element id unreadable; using file stem");
            TermId(stem)
        }
    }
}

/// Classified view of a repository checkout.
#[derive(Debug, Clone)]
pub struct RepositoryLayout {
    root: PathBuf,
    directories: Vec<DirectoryListing>,
}

impl RepositoryLayout {
    /// Scan the immediate subdirectories of `root`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::RootNotFound` if `root` is not a directory, and
    /// `LayoutError::ReadDir` if any listing fails.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(LayoutError::RootNotFound(root));
        }

        let mut directories = Vec::new();
        for path in read_sorted(&root)? {
            if !path.is_dir() || file_name(&path).starts_with('.') {
                continue;
            }
            directories.push(DirectoryListing::read(&path)?);
        }

        tracing::debug!(
            root = %root.display(),
            directories = directories.len(),
            "scanned repository layout"
        );

        Ok(Self { root, directories })
    }

    /// The scanned checkout.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every non-hidden top-level directory, sorted by name.
    pub fn directories(&self) -> &[DirectoryListing] {
        &self.directories
    }

    /// Directories holding at least one context file, sorted by name.
    pub fn collections(&self) -> impl Iterator<Item = &DirectoryListing> {
        self.of_kind(DirectoryKind::Collection)
    }

    /// Directories with element files but no context file, sorted by name.
    pub fn orphans(&self) -> impl Iterator<Item = &DirectoryListing> {
        self.of_kind(DirectoryKind::Orphan)
    }

    /// Names of all top-level directories.
    pub fn directory_names(&self) -> BTreeSet<&str> {
        self.directories.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn has_directory(&self, name: &str) -> bool {
        self.directories.iter().any(|d| d.name == name)
    }

    pub fn directory(&self, name: &str) -> Option<&DirectoryListing> {
        self.directories.iter().find(|d| d.name == name)
    }

    /// Location of `project_specs.json`, whether or not it exists.
    pub fn project_specs_path(&self) -> PathBuf {
        self.root.join(PROJECT_SPECS_FILE)
    }

    fn of_kind(&self, kind: DirectoryKind) -> impl Iterator<Item = &DirectoryListing> {
        self.directories.iter().filter(move |d| d.kind() == kind)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_sorted(dir: &Path) -> Result<Vec<PathBuf>, LayoutError> {
    let read_err = |source: std::io::Error| LayoutError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        paths.push(entry.map_err(read_err)?.path());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn suffix_helpers_distinguish_context_from_elements() {
        assert!(is_context_file("000_context.jsonld"));
        assert!(!is_element_file("000_context.jsonld"));
        assert!(is_element_file("era-5.json"));
        assert!(!is_context_file("era-5.json"));
        assert!(!is_element_file("README.md"));
    }

    #[test]
    fn scan_classifies_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("source_id/000_context.jsonld"), "{}");
        write(&root.join("source_id/era-5.json"), "{}");
        write(&root.join("loose/thing.json"), "{}");
        write(&root.join("docs/README.md"), "# docs");
        write(&root.join(".github/config.json"), "{}");
        write(&root.join("project_specs.json"), "{}");

        let layout = RepositoryLayout::scan(root).unwrap();

        let collections: Vec<_> = layout.collections().map(|d| d.name.as_str()).collect();
        let orphans: Vec<_> = layout.orphans().map(|d| d.name.as_str()).collect();
        assert_eq!(collections, vec!["source_id"]);
        assert_eq!(orphans, vec!["loose"]);
        assert_eq!(layout.directory("docs").unwrap().kind(), DirectoryKind::Plain);
        assert!(!layout.has_directory(".github"));
        assert!(!layout.has_directory("project_specs.json"));
    }

    #[test]
    fn scan_sorts_directories_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir_all(dir.path().join(name)).unwrap();
        }
        let layout = RepositoryLayout::scan(dir.path()).unwrap();
        let names: Vec<_> = layout.directory_names().into_iter().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn scan_rejects_missing_root() {
        let err = RepositoryLayout::scan("/tmp/cvrepo-no-such-root-xyz").unwrap_err();
        assert!(matches!(err, LayoutError::RootNotFound(_)));
    }

    #[test]
    fn listing_counts_subdirectories_as_non_context_entries() {
        let dir = tempfile::tempdir().unwrap();
        let coll = dir.path().join("experiment_id");
        write(&coll.join("000_context.jsonld"), "{}");
        fs::create_dir_all(coll.join("nested")).unwrap();

        let listing = DirectoryListing::read(&coll).unwrap();
        assert_eq!(listing.context_files.len(), 1);
        assert_eq!(listing.non_context_entries.len(), 1);
        assert!(listing.element_files.is_empty());
    }

    #[test]
    fn element_ids_fall_back_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let coll = dir.path().join("source_id");
        write(&coll.join("000_context.jsonld"), "{}");
        write(&coll.join("a.json"), r#"{"id": "era-5"}"#);
        write(&coll.join("b.json"), r#"{"type": "source"}"#);
        write(&coll.join("c.json"), "{ not json");

        let listing = DirectoryListing::read(&coll).unwrap();
        let ids: Vec<_> = listing.element_ids().into_iter().map(|t| t.0).collect();
        assert_eq!(ids, vec!["era-5", "b", "c"]);
    }
}
