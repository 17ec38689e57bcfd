use crate::domain::ports::Storage;
use crate::utils::error::{IconError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        fs::read(&full_path).map_err(|e| IconError::io(full_path, e))
    }

    /// Overwrites any existing file at `path`.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;
        }

        fs::write(&full_path, data).map_err(|e| IconError::io(full_path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/out.bin", b"first").unwrap();
        storage.write_file("nested/out.bin", b"second").unwrap();

        assert_eq!(storage.read_file("nested/out.bin").unwrap(), b"second");
    }

    #[test]
    fn test_write_into_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let storage = LocalStorage::new(&blocker);
        let result = storage.write_file("icon-192.png", b"data");

        assert!(matches!(result, Err(IconError::Io { .. })));
    }
}
