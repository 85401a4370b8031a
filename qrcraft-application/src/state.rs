use std::sync::Arc;

use qrcraft_domain::ports::{Clock, ImageExporter, KeyValueStore, QrEncoder, RandomSource};
use qrcraft_domain::services::ScanSimulator;
use qrcraft_domain::{GenerationRecord, History, RecordId, RuntimeConfig, Theme};
use tokio::sync::{Mutex, RwLock};

use crate::persistence;
use crate::Metrics;

/// History plus the record currently shown to the user.
#[derive(Debug, Default)]
pub struct Session {
    pub history: History,
    pub active: Option<RecordId>,
}

impl Session {
    pub fn active_record(&self) -> Option<&GenerationRecord> {
        self.active.and_then(|id| self.history.find_by_id(id))
    }
}

pub struct Adapters {
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    pub encoder: Arc<dyn QrEncoder>,
    pub exporter: Arc<dyn ImageExporter>,
    pub random: Box<dyn RandomSource>,
}

/// The session mutex is the single writer: every mutating command holds it
/// until its durable write has finished.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    pub encoder: Arc<dyn QrEncoder>,
    pub exporter: Arc<dyn ImageExporter>,
    pub session: Arc<Mutex<Session>>,
    pub simulator: Arc<Mutex<ScanSimulator>>,
    pub theme: Arc<RwLock<Theme>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Loads history and theme from durable storage; anything unreadable
    /// starts empty.
    pub async fn initialize(config: RuntimeConfig, adapters: Adapters) -> Self {
        let history = persistence::load_history(adapters.store.as_ref()).await;
        let theme = persistence::load_theme(adapters.store.as_ref()).await;
        let simulator = ScanSimulator::new(adapters.random, adapters.clock.clone());

        Self {
            config,
            store: adapters.store,
            clock: adapters.clock,
            encoder: adapters.encoder,
            exporter: adapters.exporter,
            session: Arc::new(Mutex::new(Session {
                history,
                active: None,
            })),
            simulator: Arc::new(Mutex::new(simulator)),
            theme: Arc::new(RwLock::new(theme)),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
