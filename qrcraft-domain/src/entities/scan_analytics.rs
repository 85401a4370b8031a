// Scan analytics entity
// Read model derived from a generation record's events

use serde::Serialize;

use crate::entities::ScanEvent;
use crate::value_objects::{Device, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceShare {
    pub device: Device,
    pub count: u64,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanAnalytics {
    pub record_id: RecordId,
    pub total_scans: u64,
    pub unique_visitors: u64,
    pub last_scanned_at: Option<i64>,
    pub devices: Vec<DeviceShare>,
    /// Newest first.
    pub recent_activity: Vec<ScanEvent>,
}

impl ScanAnalytics {
    pub fn share(&self, device: Device) -> Option<&DeviceShare> {
        self.devices.iter().find(|share| share.device == device)
    }
}
