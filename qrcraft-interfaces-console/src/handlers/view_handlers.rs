use qrcraft_application::queries::{analytics_queries, history_queries};
use qrcraft_application::AppState;

use crate::error::ConsoleError;
use crate::handlers::ConsoleSession;
use crate::render;

pub fn show_type(session: &ConsoleSession) -> String {
    format!(
        "Input type: {} (e.g. {})",
        session.content_type,
        session.content_type.placeholder()
    )
}

pub async fn show_history(state: &AppState) -> String {
    let session = state.session.lock().await;
    render::history(session.history.records(), session.active)
}

pub async fn show_active(state: &AppState) -> Result<String, ConsoleError> {
    let record = history_queries::active_record(state)
        .await
        .ok_or_else(|| ConsoleError::NotFound("no active QR code".to_string()))?;
    Ok(render::record(&record))
}

pub async fn show_analytics(state: &AppState) -> Result<String, ConsoleError> {
    let analytics = analytics_queries::active_analytics(state).await?;
    Ok(render::analytics(&analytics))
}

pub async fn show_stats(state: &AppState) -> String {
    let history_len = state.session.lock().await.history.len();
    let theme = *state.theme.read().await;
    render::stats(&state.metrics.snapshot(), history_len, theme)
}
