// Scan event entity
// One simulated scan of a generated code

use serde::{Deserialize, Serialize};

use crate::value_objects::{Device, ScanEventId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub id: ScanEventId,
    pub timestamp: i64,
    pub device: Device,
    pub location: String,
}

impl ScanEvent {
    pub fn new(timestamp: i64, device: Device, location: impl Into<String>) -> Self {
        Self {
            id: ScanEventId::new(),
            timestamp,
            device,
            location: location.into(),
        }
    }
}
