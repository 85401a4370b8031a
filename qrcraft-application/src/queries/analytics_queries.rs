use qrcraft_domain::services::summarize_scans;
use qrcraft_domain::{RecordId, ScanAnalytics};

use crate::queries::history_queries;
use crate::{AppError, AppState};

pub async fn record_analytics(state: &AppState, id: RecordId) -> Result<ScanAnalytics, AppError> {
    let record = history_queries::get_record(state, id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("record {}", id)))?;
    Ok(summarize_scans(&record))
}

pub async fn active_analytics(state: &AppState) -> Result<ScanAnalytics, AppError> {
    let record = history_queries::active_record(state)
        .await
        .ok_or_else(|| AppError::NotFound("no active QR code".to_string()))?;
    Ok(summarize_scans(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::history_commands::generate;
    use crate::commands::scan_commands::simulate_scan;
    use crate::test_support::test_state;
    use qrcraft_domain::{ContentType, Device};

    #[tokio::test]
    async fn analytics_reflect_recorded_scans() {
        let (state, _store) = test_state().await;
        let id = generate(&state, "https://a.com", ContentType::Url)
            .await
            .expect("generate")
            .record
            .id();
        for device in [Device::Mobile, Device::Mobile, Device::Desktop, Device::Tablet] {
            simulate_scan(&state, id, Some(device)).await.expect("scan");
        }

        let analytics = active_analytics(&state).await.expect("analytics");
        assert_eq!(analytics.record_id, id);
        assert_eq!(analytics.total_scans, 4);
        assert_eq!(analytics.unique_visitors, 4);
        assert_eq!(analytics.share(Device::Mobile).map(|s| s.percent), Some(50));
        assert_eq!(analytics.recent_activity.len(), 3);
        assert_eq!(analytics.recent_activity[0].device, Device::Tablet);

        assert_eq!(record_analytics(&state, id).await.expect("by id"), analytics);
    }

    #[tokio::test]
    async fn unknown_record_has_no_analytics() {
        let (state, _store) = test_state().await;
        assert!(matches!(
            record_analytics(&state, RecordId::new()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(active_analytics(&state).await.is_err());
    }
}
