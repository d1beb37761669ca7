// src/services/store.rs
//! Flat-file JSON persistence. Each collection is a single
//! `<name>.json` file under the data directory, rewritten wholesale on
//! every save.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }

    /// Overwrite the collection file with a pretty-printed snapshot.
    /// Creates the data directory on first write.
    pub async fn save<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        data: &T,
    ) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let json = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(self.collection_path(collection), json).await?;
        Ok(())
    }

    /// Load the latest snapshot of a collection. A missing or unreadable
    /// file is not an error: the caller gets `None` and starts fresh.
    pub async fn load<T: DeserializeOwned>(&self, collection: &str) -> Option<T> {
        let path = self.collection_path(collection);
        let bytes = tokio::fs::read(&path).await.ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding unreadable collection {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FileStore {
        let dir = std::env::temp_dir().join(format!("nextgen-store-{}", uuid::Uuid::new_v4()));
        FileStore::new(dir)
    }

    #[tokio::test]
    async fn test_load_missing_collection_returns_none() {
        let store = temp_store();
        let loaded: Option<Vec<String>> = store.load("nothing_here").await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = temp_store();
        let data = vec!["alpha".to_string(), "beta".to_string()];
        store.save("words", &data).await.unwrap();

        let loaded: Vec<String> = store.load("words").await.unwrap();
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let store = temp_store();
        store.save("counter", &vec![1, 2, 3]).await.unwrap();
        store.save("counter", &Vec::<i32>::new()).await.unwrap();

        let loaded: Vec<i32> = store.load("counter").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_none() {
        let store = temp_store();
        store.save("broken", &vec![1]).await.unwrap();
        tokio::fs::write(store.collection_path("broken"), b"{not json")
            .await
            .unwrap();

        let loaded: Option<Vec<i32>> = store.load("broken").await;
        assert!(loaded.is_none());
    }
}
