use std::path::{Path, PathBuf};

/// A source file in the caller's resource tree.
///
/// Only paths are resolved here; contents are read by the gateway at upload
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories, or the whole path when it has none.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Absolute path with symlinks resolved.
    ///
    /// Falls back to the path as given when it cannot be resolved (for
    /// instance when the file does not exist yet).
    pub fn canonical_path(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    pub fn parent(&self) -> Option<LocalFile> {
        self.canonical_path()
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(LocalFile::new)
    }

    /// Directory two levels above the file, e.g. `app/res` for
    /// `app/res/values/strings.xml`.
    ///
    /// Shallow paths resolve to the current directory.
    pub fn resource_root(&self) -> PathBuf {
        self.parent()
            .and_then(|parent| parent.parent())
            .map(|root| root.path)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl From<PathBuf> for LocalFile {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for LocalFile {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}
