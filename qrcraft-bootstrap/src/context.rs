use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use qrcraft_application::{Adapters, AppState};
use qrcraft_domain::ports::KeyValueStore;
use qrcraft_infrastructure::{
    AppConfig, FileKeyValueStore, MemoryKeyValueStore, QrCodeRenderer, SeededRandom, SystemClock,
};

#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Overrides `QRCRAFT_CONFIG`.
    pub config_path: Option<PathBuf>,
    pub ephemeral: bool,
    pub seed: Option<u64>,
}

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(options: &ContextOptions) -> Result<Self> {
        let config = match &options.config_path {
            Some(path) => AppConfig::load_from(path).await?,
            None => AppConfig::load().await?,
        };
        let runtime_config = config.to_runtime_config()?;

        let store: Arc<dyn KeyValueStore> = if options.ephemeral {
            info!("ephemeral session, nothing will be persisted");
            Arc::new(MemoryKeyValueStore::new())
        } else {
            info!("storing history in {}", runtime_config.data_dir);
            Arc::new(FileKeyValueStore::new(&runtime_config.data_dir))
        };

        let random = match options.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy()?,
        };

        let renderer = Arc::new(QrCodeRenderer::new());
        let adapters = Adapters {
            store,
            clock: Arc::new(SystemClock),
            encoder: renderer.clone(),
            exporter: renderer,
            random: Box::new(random),
        };
        let state = AppState::initialize(runtime_config, adapters).await;

        Ok(Self { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrcraft_application::queries::history_queries;

    #[tokio::test]
    async fn file_backed_context_reloads_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_path = dir.path().join("qrcraft.toml");
        std::fs::write(&config_path, "data_dir = \"store\"\ngenerate_delay_ms = 0\n").expect("config");
        let options = ContextOptions {
            config_path: Some(config_path),
            ephemeral: false,
            seed: Some(3),
        };

        let first = AppContext::new(&options).await.expect("context");
        qrcraft_application::commands::history_commands::generate(
            &first.state,
            "https://a.com",
            qrcraft_domain::ContentType::Url,
        )
        .await
        .expect("generate");
        assert!(dir.path().join("store").join("qrcraft_history.json").exists());

        let second = AppContext::new(&options).await.expect("context");
        let history = history_queries::list_history(&second.state).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].value(), "https://a.com");
    }

    #[tokio::test]
    async fn ephemeral_context_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_path = dir.path().join("qrcraft.toml");
        let options = ContextOptions {
            config_path: Some(config_path),
            ephemeral: true,
            seed: Some(3),
        };

        let context = AppContext::new(&options).await.expect("context");
        qrcraft_application::commands::history_commands::generate(
            &context.state,
            "hello",
            qrcraft_domain::ContentType::Text,
        )
        .await
        .expect("generate");
        assert!(!dir.path().join("data").exists());
    }
}
