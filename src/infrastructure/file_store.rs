use crate::domain::store::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        tokio::fs::write(&tmp, value)
            .await
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("failed to replace {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let store = FileStore::new(temp_dir.path());
        assert_eq!(store.get("decisionLists").await?, None);
        Ok(())
    }

    #[test]
    fn test_location_names_the_directory() {
        let store = FileStore::new("/tmp/decider-lists");
        assert_eq!(store.location(), "/tmp/decider-lists");
    }

    #[tokio::test]
    async fn test_set_then_get() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let store = FileStore::new(temp_dir.path().join("nested"));
        store.set("decisionLists", "[]").await?;
        store.set("decisionLists", r#"[{"title":"x"}]"#).await?;
        assert_eq!(
            store.get("decisionLists").await?.as_deref(),
            Some(r#"[{"title":"x"}]"#)
        );
        assert!(temp_dir.path().join("nested/decisionLists.json").exists());
        assert!(!temp_dir.path().join("nested/.decisionLists.json.tmp").exists());
        Ok(())
    }
}
