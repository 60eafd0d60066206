use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Storage capability the answer store reads from and writes to.
pub trait Filesystem {
    /// Returns whether something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file at `path`.
    ///
    /// # Returns
    /// * `Result<String>` - File contents, or an I/O error if unreadable
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes `contents` to `path`, replacing anything already there.
    ///
    /// The parent directory must already exist.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Creates `path` and all of its missing ancestors.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (**self).create_dir_all(path)
    }
}

/// Filesystem backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(Error::IoError)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(Error::IoError)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(Error::IoError)
    }
}

/// Filesystem kept entirely in memory.
///
/// Useful for dry runs and for exercising the store without touching disk.
/// Writes can be switched off to simulate a read-only location.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: RefCell<HashMap<PathBuf, String>>,
    read_only: bool,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filesystem whose writes always fail with `PermissionDenied`.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    /// Seeds a file, bypassing the read-only flag.
    pub fn with_file<P: Into<PathBuf>>(self, path: P, contents: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.to_string());
        self
    }

    /// Returns the current contents of a file, if any.
    pub fn contents<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("'{}' does not exist", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("'{}' is read-only", path.display()),
            )));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_filesystem_round_trips_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answers.json");
        let fs = LocalFilesystem;

        assert!(!fs.exists(&path));
        fs.write(&path, "{}").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn local_filesystem_write_requires_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("answers.json");
        let err = LocalFilesystem.write(&path, "{}").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));

        LocalFilesystem.create_dir_all(path.parent().unwrap()).unwrap();
        LocalFilesystem.write(&path, "{}").unwrap();
    }

    #[test]
    fn local_filesystem_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = LocalFilesystem.read_to_string(&dir.path().join("nope")).unwrap_err();
        match err {
            Error::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn memory_filesystem_tracks_writes() {
        let fs = MemoryFilesystem::new().with_file("a.json", "1");
        assert!(fs.exists(Path::new("a.json")));
        assert!(!fs.exists(Path::new("b.json")));

        fs.write(Path::new("b.json"), "2").unwrap();
        assert_eq!(fs.contents("b.json").as_deref(), Some("2"));
    }

    #[test]
    fn read_only_memory_filesystem_rejects_writes() {
        let fs = MemoryFilesystem::read_only().with_file("a.json", "1");
        assert!(fs.write(Path::new("a.json"), "2").is_err());
        assert_eq!(fs.contents("a.json").as_deref(), Some("1"));
    }
}
