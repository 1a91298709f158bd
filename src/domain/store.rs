use anyhow::Result;
use async_trait::async_trait;

/// Key under which the whole list collection is stored.
pub const LISTS_KEY: &str = "decisionLists";

/// A persistent string-keyed string store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Human-readable location, for the header and error messages.
    fn location(&self) -> String;
}
