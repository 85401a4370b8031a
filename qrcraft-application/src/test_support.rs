use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use qrcraft_domain::ports::{Clock, ImageExporter, KeyValueStore, QrEncoder, RandomSource};
use qrcraft_domain::{ExportFormat, QrBitmap, QrConfig, RuntimeConfig};

use crate::{Adapters, AppState};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock").get(key).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("storage quota exceeded"));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.check()?;
        self.entries.lock().expect("store lock").remove(key);
        Ok(())
    }
}

/// Advances one millisecond per reading so every event gets a distinct time.
pub struct StepClock(AtomicI64);

impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

pub struct CyclingRandom(usize);

impl RandomSource for CyclingRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.0 % bound;
        self.0 += 1;
        index
    }
}

/// Encodes every byte of the text as one pixel column.
pub struct StubEncoder;

impl QrEncoder for StubEncoder {
    fn encode(&self, text: &str, config: &QrConfig) -> Result<QrBitmap> {
        let width = text.len() as u32;
        let pixels = text
            .bytes()
            .flat_map(|_| config.foreground.0)
            .collect();
        Ok(QrBitmap {
            width,
            height: 1,
            pixels,
        })
    }
}

pub struct StubExporter;

impl ImageExporter for StubExporter {
    fn export(&self, bitmap: &QrBitmap, format: ExportFormat) -> Result<Vec<u8>> {
        let mut bytes = format.extension().as_bytes().to_vec();
        bytes.extend_from_slice(&bitmap.pixels);
        Ok(bytes)
    }
}

pub async fn test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (state_with_store(store.clone()).await, store)
}

pub async fn state_with_store(store: Arc<MemoryStore>) -> AppState {
    let adapters = Adapters {
        store,
        clock: Arc::new(StepClock(AtomicI64::new(1_000))),
        encoder: Arc::new(StubEncoder),
        exporter: Arc::new(StubExporter),
        random: Box::new(CyclingRandom(0)),
    };
    AppState::initialize(RuntimeConfig::default(), adapters).await
}
