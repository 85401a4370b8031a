use qrcraft_domain::services::validate;
use qrcraft_domain::{ContentType, GenerationOutcome, GenerationRecord};
use tracing::{debug, info};

use crate::persistence;
use crate::{AppError, AppState};

/// Validates the input, then records it: a known value is touched and moved
/// to the front, a new one is inserted (evicting the oldest past capacity).
/// The resulting record becomes the active one.
pub async fn generate(
    state: &AppState,
    value: &str,
    content_type: ContentType,
) -> Result<GenerationOutcome, AppError> {
    let validation = validate(value, content_type);
    if !validation.valid {
        state.metrics.record_validation_failure();
        return Err(AppError::Validation(validation.message));
    }

    let mut session = state.session.lock().await;
    let now = state.clock.now_millis();
    let outcome = session.history.record_generation(value, content_type, now);
    session.active = Some(outcome.record.id());
    persistence::save_history(state, &session.history).await;

    state
        .metrics
        .record_generation(outcome.is_new, outcome.evicted.len());
    for evicted in &outcome.evicted {
        debug!("evicted history record {} ({})", evicted.id(), evicted.value());
    }
    info!(
        "{} {} record {} ({} in history)",
        if outcome.is_new { "created" } else { "touched" },
        content_type,
        outcome.record.id(),
        session.history.len()
    );
    Ok(outcome)
}

/// Selecting matches on content, so re-selecting a value reuses its entry.
pub async fn select_from_history(
    state: &AppState,
    value: &str,
) -> Result<GenerationRecord, AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(
            "select needs the value of a history entry".to_string(),
        ));
    }
    let mut session = state.session.lock().await;
    let record = session
        .history
        .find_by_value(value)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no history entry for '{}'", value)))?;
    session.active = Some(record.id());
    Ok(record)
}

pub async fn deselect(state: &AppState) {
    state.session.lock().await.active = None;
}

/// Empties the history and removes its durable entry entirely.
pub async fn clear_history(state: &AppState) {
    let mut session = state.session.lock().await;
    let removed = session.history.len();
    session.history.clear();
    session.active = None;
    persistence::remove_history(state).await;
    info!("cleared {} history records", removed);
}
