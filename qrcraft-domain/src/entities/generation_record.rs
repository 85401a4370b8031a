// Generation record entity
// One history entry per distinct encoded value

use serde::{Deserialize, Serialize};

use crate::entities::ScanEvent;
use crate::value_objects::{ContentType, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredRecord")]
pub struct GenerationRecord {
    id: RecordId,
    value: String,
    content_type: ContentType,
    created_at: i64,
    last_touched_at: i64,
    scan_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_scanned_at: Option<i64>,
    events: Vec<ScanEvent>,
}

impl GenerationRecord {
    pub fn new(value: impl Into<String>, content_type: ContentType, now: i64) -> Self {
        Self {
            id: RecordId::new(),
            value: value.into(),
            content_type,
            created_at: now,
            last_touched_at: now,
            scan_count: 0,
            last_scanned_at: None,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn last_touched_at(&self) -> i64 {
        self.last_touched_at
    }

    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }

    pub fn last_scanned_at(&self) -> Option<i64> {
        self.last_scanned_at
    }

    /// Scan events in the order they were recorded.
    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    pub(crate) fn touch(&mut self, now: i64) {
        self.last_touched_at = now;
    }

    pub(crate) fn record_scan(&mut self, event: ScanEvent) {
        self.scan_count += 1;
        self.last_scanned_at = Some(event.timestamp);
        self.events.push(event);
    }
}

// Accepts both the current layout and the older single-`timestamp` layout.
// The scan counter is always re-derived from the event list.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: RecordId,
    value: String,
    #[serde(alias = "type")]
    content_type: ContentType,
    created_at: Option<i64>,
    last_touched_at: Option<i64>,
    timestamp: Option<i64>,
    last_scanned_at: Option<i64>,
    #[serde(default)]
    events: Vec<ScanEvent>,
}

impl From<StoredRecord> for GenerationRecord {
    fn from(stored: StoredRecord) -> Self {
        let last_touched_at = stored
            .last_touched_at
            .or(stored.timestamp)
            .or(stored.created_at)
            .unwrap_or_default();
        let created_at = stored.created_at.unwrap_or(last_touched_at);
        let last_scanned_at = stored
            .last_scanned_at
            .or_else(|| stored.events.last().map(|event| event.timestamp));
        Self {
            id: stored.id,
            value: stored.value,
            content_type: stored.content_type,
            created_at,
            last_touched_at,
            scan_count: stored.events.len() as u64,
            last_scanned_at,
            events: stored.events,
        }
    }
}
