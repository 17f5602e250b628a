use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Abstraction over the /proc and /sys trees the hardware detector reads.
/// Defaults to `/` in production, redirectable to a temp directory for testing.
#[derive(Debug, Clone)]
pub struct SysRoot {
    root: PathBuf,
}

impl Default for SysRoot {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
        }
    }
}

impl SysRoot {
    /// Create a SysRoot pointing at the real system.
    pub fn system() -> Self {
        Self::default()
    }

    /// Create a SysRoot pointing at a custom directory (for testing).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a path relative to this root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Read a file, trimming whitespace.
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.path(relative);
        std::fs::read_to_string(&path)
            .map(|s| s.trim().to_string())
            .map_err(|e| Error::SysRead { path, source: e })
    }

    /// Read a file, returning None if it doesn't exist or is unreadable.
    pub fn read_optional(&self, relative: impl AsRef<Path>) -> Result<Option<String>> {
        let path = self.path(relative);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => Ok(None),
            Err(e) => Err(Error::SysRead { path, source: e }),
        }
    }

    /// Read a file and parse it as a specific type.
    pub fn read_parse<T: std::str::FromStr>(&self, relative: impl AsRef<Path>) -> Result<T>
    where
        T::Err: std::fmt::Display,
    {
        let relative = relative.as_ref();
        let value = self.read(relative)?;
        value.parse::<T>().map_err(|e| Error::Parse {
            path: self.path(relative),
            detail: format!("failed to parse '{}': {}", value, e),
        })
    }

    /// List entries in a directory, sorted by name.
    pub fn list_dir(&self, relative: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = self.path(relative);
        let entries = std::fs::read_dir(&path).map_err(|e| Error::SysRead {
            path: path.clone(),
            source: e,
        })?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::SysRead {
                path: path.clone(),
                source: e,
            })?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Check if a path exists relative to this root.
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.path(relative).exists()
    }

    /// Get the root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_parse() {
        let tmp = tempfile::tempdir().unwrap();
        let sys = SysRoot::new(tmp.path());

        fs::create_dir_all(tmp.path().join("sys/test")).unwrap();
        fs::write(tmp.path().join("sys/test/value"), "42\n").unwrap();

        assert_eq!(sys.read("sys/test/value").unwrap(), "42");
        assert_eq!(sys.read_parse::<u32>("sys/test/value").unwrap(), 42);
    }

    #[test]
    fn test_read_optional_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let sys = SysRoot::new(tmp.path());

        assert_eq!(sys.read_optional("sys/nonexistent").unwrap(), None);
    }

    #[test]
    fn test_list_dir_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let sys = SysRoot::new(tmp.path());

        fs::create_dir_all(tmp.path().join("sys/block")).unwrap();
        fs::write(tmp.path().join("sys/block/sdb"), "").unwrap();
        fs::write(tmp.path().join("sys/block/sda"), "").unwrap();

        assert_eq!(sys.list_dir("sys/block").unwrap(), vec!["sda", "sdb"]);
    }
}
