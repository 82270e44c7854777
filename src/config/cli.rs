use crate::core::Storage;
use crate::utils::error::{FetchError, Result};
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
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| FetchError::WriteError {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        // Truncates an existing file; never appends.
        tokio::fs::write(&full_path, data)
            .await
            .map_err(|source| FetchError::WriteError {
                path: full_path.clone(),
                source,
            })?;

        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("data"));

        let written = storage
            .write_file(Path::new("covid-worldwide.csv"), b"first run, longer content\n")
            .await
            .unwrap();
        assert_eq!(written, temp_dir.path().join("data/covid-worldwide.csv"));

        storage
            .write_file(Path::new("covid-worldwide.csv"), b"second\n")
            .await
            .unwrap();
        assert_eq!(std::fs::read(&written).unwrap(), b"second\n");
    }

    #[tokio::test]
    async fn test_write_into_file_as_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("data");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let storage = LocalStorage::new(&blocker);
        let result = storage.write_file(Path::new("out.json"), b"{}").await;
        assert!(matches!(result, Err(FetchError::WriteError { .. })));
    }
}
