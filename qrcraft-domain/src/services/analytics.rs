use crate::entities::{DeviceShare, GenerationRecord, ScanAnalytics};
use crate::value_objects::Device;

const RECENT_ACTIVITY_LIMIT: usize = 3;

/// Mock analytics for one record. Visitor count is estimated as 85% of scans
/// rounded up; device percentages are rounded to the nearest whole number.
pub fn summarize_scans(record: &GenerationRecord) -> ScanAnalytics {
    let events = record.events();
    let denominator = events.len().max(1) as f64;

    let devices = Device::ALL
        .into_iter()
        .map(|device| {
            let count = events.iter().filter(|event| event.device == device).count() as u64;
            DeviceShare {
                device,
                count,
                percent: ((count as f64 / denominator) * 100.0).round() as u32,
            }
        })
        .collect();

    let recent_activity = events
        .iter()
        .rev()
        .take(RECENT_ACTIVITY_LIMIT)
        .cloned()
        .collect();

    let total_scans = record.scan_count();
    ScanAnalytics {
        record_id: record.id(),
        total_scans,
        unique_visitors: (total_scans * 85).div_ceil(100),
        last_scanned_at: record.last_scanned_at(),
        devices,
        recent_activity,
    }
}
