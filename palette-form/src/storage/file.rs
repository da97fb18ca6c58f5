use super::SessionStorage;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Session storage persisted as a flat JSON object on disk
///
/// Lets the headless CLI hand the palette result to whatever renders the
/// results page. Writes go through a temp file and a rename.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Map<String, Value>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::storage(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    async fn save(&self, items: &Map<String, Value>) -> Result<()> {
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(items)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        let items = self.load().await?;
        Ok(items
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        items.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&items).await?;
        log::debug!("FileStorage: Stored {} in {}", key, self.path.display());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.save(&items).await?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        assert_eq!(storage.get_item("paletteResult").await.unwrap(), None);

        storage
            .set_item("paletteResult", r#"{"season":"Winter"}"#)
            .await
            .unwrap();

        let reopened = FileStorage::new(dir.path().join("session.json"));
        assert_eq!(
            reopened.get_item("paletteResult").await.unwrap().as_deref(),
            Some(r#"{"season":"Winter"}"#)
        );

        reopened.remove_item("paletteResult").await.unwrap();
        assert_eq!(storage.get_item("paletteResult").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let storage = FileStorage::new(&path);
        let err = storage.set_item("paletteResult", "{}").await.unwrap_err();
        assert_eq!(err.error_code(), "E_STORAGE");
    }
}
