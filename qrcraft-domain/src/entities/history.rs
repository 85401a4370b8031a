// History entity
// Recency-ordered generation records, capped at HISTORY_CAPACITY

use std::collections::HashSet;

use crate::entities::{GenerationRecord, ScanEvent};
use crate::value_objects::{ContentType, RecordId};

pub const HISTORY_CAPACITY: usize = 15;

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub record: GenerationRecord,
    pub is_new: bool,
    /// Records pushed past the capacity by this generation.
    pub evicted: Vec<GenerationRecord>,
}

/// Front of the list is the most recently created or touched record.
///
/// Eviction is "prepend, then keep the first `HISTORY_CAPACITY`". Because
/// every touch moves its record to the front, the record dropped from the
/// tail is always the least recently touched one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<GenerationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from previously stored records, dropping duplicate
    /// values (first occurrence wins) and anything past the capacity.
    pub fn from_records(records: Vec<GenerationRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(records.len().min(HISTORY_CAPACITY));
        for record in records {
            if kept.len() >= HISTORY_CAPACITY {
                break;
            }
            if seen.insert(record.value().to_string()) {
                kept.push(record);
            }
        }
        Self { records: kept }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let records: Vec<GenerationRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_records(records))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&GenerationRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_by_value(&self, value: &str) -> Option<&GenerationRecord> {
        self.records.iter().find(|record| record.value() == value)
    }

    pub fn record_generation(
        &mut self,
        value: &str,
        content_type: ContentType,
        now: i64,
    ) -> GenerationOutcome {
        if let Some(position) = self.records.iter().position(|record| record.value() == value) {
            let mut record = self.records.remove(position);
            record.touch(now);
            self.records.insert(0, record.clone());
            return GenerationOutcome {
                record,
                is_new: false,
                evicted: Vec::new(),
            };
        }

        let record = GenerationRecord::new(value, content_type, now);
        self.records.insert(0, record.clone());
        let evicted = if self.records.len() > HISTORY_CAPACITY {
            self.records.split_off(HISTORY_CAPACITY)
        } else {
            Vec::new()
        };
        GenerationOutcome {
            record,
            is_new: true,
            evicted,
        }
    }

    /// Returns `None` when no record has this id (for example after eviction).
    pub fn append_scan_event(&mut self, id: RecordId, event: ScanEvent) -> Option<&GenerationRecord> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        record.record_scan(event);
        Some(record)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
