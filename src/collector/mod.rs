//! Source collector for resolving the audited root into file groups.
//!
//! The collector exposes exactly what the scorers need: the page and
//! component file groups (scanned one level deep, never recursively)
//! and the three optional single files (stylesheet, header, app).
//! Nothing else in the tree is visible to the audit.

use crate::config::PathsConfig;
use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A collected source file: path identity reduced to the file name, plus text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name (no directory prefix).
    pub name: String,
    /// UTF-8 decoded content.
    pub content: String,
}

/// A directory-backed file group.
///
/// `exists` distinguishes a missing directory from a present-but-empty one.
/// The consistency and feedback scorers branch on that distinction.
#[derive(Debug, Clone, Default)]
pub struct FileGroup {
    pub exists: bool,
    pub files: Vec<SourceFile>,
}

impl FileGroup {
    /// The group for a directory that is not there at all.
    pub fn absent() -> Self {
        Self {
            exists: false,
            files: Vec::new(),
        }
    }
}

/// Everything a single audit run reads from disk.
#[derive(Debug, Clone)]
pub struct SourceTree {
    pub pages: FileGroup,
    pub components: FileGroup,
    pub stylesheet: Option<SourceFile>,
    pub header: Option<SourceFile>,
    pub app: Option<SourceFile>,
}

impl SourceTree {
    /// Pages and components together, pages first.
    pub fn markup_files(&self) -> impl Iterator<Item = &SourceFile> {
        self.pages.files.iter().chain(self.components.files.iter())
    }
}

/// Resolves an audited root into a [`SourceTree`].
pub struct SourceCollector {
    root: PathBuf,
    paths: PathsConfig,
}

impl SourceCollector {
    pub fn new(root: PathBuf, paths: PathsConfig) -> Self {
        Self { root, paths }
    }

    /// Read all audited files. A missing subdirectory or optional file is
    /// not an error; a root that does not exist is.
    pub fn collect(&self) -> Result<SourceTree> {
        if !self.root.is_dir() {
            bail!("Audited root is not a directory: {}", self.root.display());
        }

        Ok(SourceTree {
            pages: self.collect_group(&self.paths.pages_dir),
            components: self.collect_group(&self.paths.components_dir),
            stylesheet: self.read_single(&self.paths.stylesheet),
            header: self.read_single(&self.paths.header),
            app: self.read_single(&self.paths.app),
        })
    }

    /// Gather matching files directly under `relative_dir`, sorted by name.
    fn collect_group(&self, relative_dir: &str) -> FileGroup {
        let dir = self.root.join(relative_dir);
        if !dir.is_dir() {
            debug!("Directory not present, group is empty: {}", dir.display());
            return FileGroup::absent();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !self.matches_extension(path) {
                continue;
            }
            if let Some(file) = self.read_file(path) {
                files.push(file);
            }
        }

        FileGroup {
            exists: true,
            files,
        }
    }

    /// Read one of the optional fixed-path files.
    fn read_single(&self, relative_path: &str) -> Option<SourceFile> {
        let path = self.root.join(relative_path);
        if !path.is_file() {
            debug!("Optional file not present: {}", path.display());
            return None;
        }
        self.read_file(&path)
    }

    /// Text-decode a file. A decode/read failure is surfaced and the file
    /// is skipped for this run; it never aborts the whole audit.
    fn read_file(&self, path: &Path) -> Option<SourceFile> {
        match fs::read_to_string(path) {
            Ok(content) => Some(SourceFile {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                content,
            }),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext == self.paths.extension)
            .unwrap_or(false)
    }
}
