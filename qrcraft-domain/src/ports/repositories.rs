use async_trait::async_trait;

/// Durable-storage key holding the serialized history.
pub const HISTORY_KEY: &str = "qrcraft_history";
/// Durable-storage key holding the theme preference.
pub const THEME_KEY: &str = "qrcraft_theme";

/// Local key-value persistence. Deleting a missing key is not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}
