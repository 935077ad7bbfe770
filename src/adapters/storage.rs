use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Filesystem-backed storage for CSV sources. Paths are used as given; the
/// cache key a caller compiles under is the same string handed to the
/// filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        Ok(data)
    }

    async fn file_exists(&self, path: &str) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_and_exists_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.csv");
        std::fs::write(&path, "101,7,2024-01-01,2024-02-01").unwrap();
        let path = path.to_string_lossy().into_owned();

        let storage = LocalStorage::new();
        assert!(storage.file_exists(&path).await);
        assert_eq!(
            storage.read_file(&path).await.unwrap(),
            b"101,7,2024-01-01,2024-02-01"
        );
    }

    #[tokio::test]
    async fn test_missing_file_does_not_exist() {
        let storage = LocalStorage::new();
        assert!(!storage.file_exists("/no/such/file.csv").await);
        assert!(storage.read_file("/no/such/file.csv").await.is_err());
    }
}
