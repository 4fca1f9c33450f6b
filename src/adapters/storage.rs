use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

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
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);
        let write_error = |source: std::io::Error| EtlError::IoWriteError {
            path: full_path.clone(),
            source,
        };

        // 只建立輸出目錄本身，檔名中的子目錄不自動建立
        fs::create_dir_all(&self.base_path).map_err(|source| EtlError::IoWriteError {
            path: self.base_path.clone(),
            source,
        })?;

        // 先寫暫存檔再 rename，失敗時不會留下截斷的舊檔
        let dir = full_path.parent().unwrap_or(&self.base_path);
        let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
        temp.write_all(data).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&full_path).map_err(|e| write_error(e.error))?;

        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_directory_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested"));

        let first = tokio_test::block_on(storage.write_file("1.json", b"{\"a\": 1, \"b\": 2}"))
            .unwrap();
        let second = tokio_test::block_on(storage.write_file("1.json", b"[]")).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"[]");

        // 不留下暫存檔
        let entries = std::fs::read_dir(temp_dir.path().join("nested")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_identifier_with_separator_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = tokio_test::block_on(storage.write_file("a/b.json", b"[]")).unwrap_err();

        assert!(matches!(err, EtlError::IoWriteError { .. }));
        assert!(!temp_dir.path().join("a").exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("1.json");
        std::fs::create_dir(&existing).unwrap();

        // 目標是目錄，rename 失敗
        let storage = LocalStorage::new(temp_dir.path());
        let err = tokio_test::block_on(storage.write_file("1.json", b"[]")).unwrap_err();

        assert!(matches!(err, EtlError::IoWriteError { .. }));
        assert!(existing.is_dir());
        let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let storage = LocalStorage::new(&blocker);
        let err = tokio_test::block_on(storage.write_file("1.json", b"[]")).unwrap_err();

        assert!(matches!(err, EtlError::IoWriteError { .. }));
    }
}
