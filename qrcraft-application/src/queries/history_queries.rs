use qrcraft_domain::{GenerationRecord, RecordId};

use crate::AppState;

/// Recency order, most recently created or touched first.
pub async fn list_history(state: &AppState) -> Vec<GenerationRecord> {
    state.session.lock().await.history.records().to_vec()
}

pub async fn get_record(state: &AppState, id: RecordId) -> Option<GenerationRecord> {
    state.session.lock().await.history.find_by_id(id).cloned()
}

pub async fn active_record(state: &AppState) -> Option<GenerationRecord> {
    state.session.lock().await.active_record().cloned()
}
