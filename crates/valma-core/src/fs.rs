//! Filesystem seam for the batch jobs.
//!
//! The merge and revert transforms only touch files through [`StudentFs`], so
//! they can run against the real disk ([`DiskFs`]) or an in-memory tree
//! ([`MemoryFs`]) in tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File operations needed by the student folder transforms.
pub trait StudentFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`, sorted by name.
    fn list_dirs(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// [`StudentFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl StudentFs for DiskFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

/// In-memory [`StudentFs`].
///
/// Directories exist implicitly for every ancestor of a stored file, or
/// explicitly through [`MemoryFs::create_dir`]. Paths can be marked unreadable
/// to simulate I/O failures.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    unreadable: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn create_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.borrow_mut().insert(path.into());
    }

    /// Make every subsequent read of `path` fail with `PermissionDenied`.
    pub fn deny_read(&self, path: impl Into<PathBuf>) {
        self.unreadable.borrow_mut().insert(path.into());
    }

    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// All stored file paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn known_dirs(&self) -> BTreeSet<PathBuf> {
        let mut dirs = self.dirs.borrow().clone();
        for path in self.files.borrow().keys() {
            let mut current = path.parent();
            while let Some(dir) = current {
                if dir.as_os_str().is_empty() {
                    break;
                }
                dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
        }
        dirs
    }
}

impl StudentFs for MemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read denied: {}", path.display()),
            ));
        }
        self.file(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.insert(path, contents);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.files.borrow_mut().remove(path).map(|_| ()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.known_dirs().contains(path)
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let dirs = self.known_dirs();
        if !dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        }
        Ok(dirs
            .into_iter()
            .filter(|dir| dir.parent() == Some(path))
            .collect())
    }
}
