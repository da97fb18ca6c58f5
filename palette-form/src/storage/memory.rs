use super::SessionStorage;
use crate::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory session storage backed by DashMap
///
/// Clones share the same map, so a test can keep a handle while the
/// submission handler owns another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        log::debug!(
            "MemoryStorage: Storing {} ({} bytes)",
            key,
            value.len()
        );
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_basic_operations() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("paletteResult").await.unwrap(), None);

        storage
            .set_item("paletteResult", r#"{"season":"Autumn"}"#)
            .await
            .unwrap();
        storage
            .set_item("paletteResult", r#"{"season":"Winter"}"#)
            .await
            .unwrap();

        assert_eq!(
            storage.get_item("paletteResult").await.unwrap().as_deref(),
            Some(r#"{"season":"Winter"}"#)
        );
        assert_eq!(storage.len(), 1);

        storage.remove_item("paletteResult").await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_items() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set_item("k", "v").await.unwrap();
        assert_eq!(handle.get_item("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(handle.backend_name(), "memory");
    }
}
