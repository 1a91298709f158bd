use crate::domain::models::DecisionList;
use crate::domain::store::{KeyValueStore, LISTS_KEY};
use anyhow::{Context, Result};
use std::sync::Arc;

/// JSON view of the list collection on top of a string store.
#[derive(Clone)]
pub struct ListPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl ListPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Reads the collection, seeding and saving the locked default list when
    /// the store is empty, missing, or unreadable as JSON.
    pub async fn load(&self) -> Result<Vec<DecisionList>> {
        let mut lists = match self.store.get(LISTS_KEY).await? {
            Some(raw) => match serde_json::from_str::<Vec<DecisionList>>(&raw) {
                Ok(lists) => lists,
                Err(e) => {
                    tracing::warn!(error = %e, "stored lists are malformed, starting fresh");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if lists.is_empty() {
            tracing::info!("no lists stored, seeding default list");
            lists.push(DecisionList::seed());
            self.save(&lists).await?;
        }

        tracing::info!(count = lists.len(), location = %self.location(), "lists loaded");
        Ok(lists)
    }

    pub async fn save(&self, lists: &[DecisionList]) -> Result<()> {
        let raw = serde_json::to_string(lists).context("failed to serialize lists")?;
        self.store.set(LISTS_KEY, &raw).await?;
        tracing::info!(count = lists.len(), "lists saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MockKeyValueStore;
    use crate::infrastructure::MemoryStore;

    #[tokio::test]
    async fn test_seeding_is_idempotent() -> Result<()> {
        let store = Arc::new(MemoryStore::new());
        let persistence = ListPersistence::new(store.clone());

        let first = persistence.load().await?;
        assert_eq!(first.len(), 1);
        assert!(first[0].locked);

        let second = persistence.load().await?;
        assert_eq!(second, first);
        assert!(store.get(LISTS_KEY).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_array_is_reseeded() -> Result<()> {
        let store = Arc::new(MemoryStore::with_value(LISTS_KEY, "[]"));
        let lists = ListPersistence::new(store).load().await?;
        assert_eq!(lists, vec![DecisionList::seed()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_data_is_reseeded() -> Result<()> {
        let store = Arc::new(MemoryStore::with_value(LISTS_KEY, "{not json"));
        let persistence = ListPersistence::new(store.clone());
        let lists = persistence.load().await?;
        assert_eq!(lists, vec![DecisionList::seed()]);

        let raw = store.get(LISTS_KEY).await?.unwrap_or_default();
        let stored: Vec<DecisionList> = serde_json::from_str(&raw)?;
        assert_eq!(stored, lists);
        Ok(())
    }

    #[tokio::test]
    async fn test_legacy_entries_load_unlocked() -> Result<()> {
        let raw = r#"[{"title":"Movies","options":["Alien","Heat"]}]"#;
        let store = Arc::new(MemoryStore::with_value(LISTS_KEY, raw));
        let lists = ListPersistence::new(store).load().await?;
        assert_eq!(lists.len(), 1);
        assert!(!lists[0].locked);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_collection() -> Result<()> {
        let store = Arc::new(MemoryStore::new());
        let persistence = ListPersistence::new(store.clone());
        let mut lists = persistence.load().await?;
        lists.push(DecisionList::new("Games", vec!["Chess".into(), "Go".into()]));
        persistence.save(&lists).await?;
        assert_eq!(persistence.load().await?, lists);
        Ok(())
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Err(anyhow::anyhow!("permission denied")));
        mock.expect_location().returning(|| "mock".to_string());

        let result = ListPersistence::new(Arc::new(mock)).load().await;
        assert!(result.unwrap_err().to_string().contains("permission denied"));
    }

    #[tokio::test]
    async fn test_seed_save_failure_propagates() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set()
            .withf(|key, _| key.to_string() == LISTS_KEY)
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));
        mock.expect_location().returning(|| "mock".to_string());

        let result = ListPersistence::new(Arc::new(mock)).load().await;
        assert!(result.is_err());
    }
}
