use qrcraft_domain::{Device, RecordId, ScanEvent};
use tracing::{info, warn};

use crate::persistence;
use crate::{AppError, AppState};

/// Appends a synthetic scan to the record. A record that no longer exists
/// (evicted or cleared) yields `Ok(None)` and nothing changes.
pub async fn simulate_scan(
    state: &AppState,
    record_id: RecordId,
    device: Option<Device>,
) -> Result<Option<ScanEvent>, AppError> {
    let event = state.simulator.lock().await.simulate(device);

    let mut session = state.session.lock().await;
    let Some(record) = session.history.append_scan_event(record_id, event.clone()) else {
        state.metrics.record_ignored_scan();
        warn!("scan ignored, record {} is no longer in history", record_id);
        return Ok(None);
    };
    let scan_count = record.scan_count();
    persistence::save_history(state, &session.history).await;

    state.metrics.record_scan();
    info!(
        "scan #{} on record {} from {} ({})",
        scan_count, record_id, event.location, event.device
    );
    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::history_commands::{clear_history, generate};
    use crate::queries::history_queries;
    use crate::test_support::{state_with_store, test_state};
    use qrcraft_domain::ContentType;

    #[tokio::test]
    async fn scans_accumulate_and_persist() {
        let (state, store) = test_state().await;
        let id = generate(&state, "https://a.com", ContentType::Url)
            .await
            .expect("generate")
            .record
            .id();

        let mut recorded = Vec::new();
        for _ in 0..4 {
            let event = simulate_scan(&state, id, None)
                .await
                .expect("scan")
                .expect("record exists");
            recorded.push(event);
        }

        let record = history_queries::get_record(&state, id).await.expect("record");
        assert_eq!(record.scan_count(), 4);
        assert_eq!(record.events(), recorded.as_slice());
        assert_eq!(record.last_scanned_at(), recorded.last().map(|e| e.timestamp));

        let reloaded = state_with_store(store).await;
        let record = history_queries::get_record(&reloaded, id).await.expect("reloaded");
        assert_eq!(record.events(), recorded.as_slice());
    }

    #[tokio::test]
    async fn device_override_is_respected() {
        let (state, _store) = test_state().await;
        let id = generate(&state, "note", ContentType::Text)
            .await
            .expect("generate")
            .record
            .id();
        let event = simulate_scan(&state, id, Some(Device::Tablet))
            .await
            .expect("scan")
            .expect("record exists");
        assert_eq!(event.device, Device::Tablet);
    }

    #[tokio::test]
    async fn scan_after_clear_is_a_no_op() {
        let (state, store) = test_state().await;
        let id = generate(&state, "note", ContentType::Text)
            .await
            .expect("generate")
            .record
            .id();
        clear_history(&state).await;

        let result = simulate_scan(&state, id, None).await.expect("no error");
        assert!(result.is_none());
        assert!(store.get(qrcraft_domain::ports::HISTORY_KEY).is_none());
        assert_eq!(state.metrics.snapshot().ignored_scans, 1);
    }
}
