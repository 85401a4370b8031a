use qrcraft_domain::ports::{KeyValueStore, HISTORY_KEY, THEME_KEY};
use qrcraft_domain::{History, Theme};
use tracing::{debug, warn};

use crate::AppState;

pub async fn load_history(store: &dyn KeyValueStore) -> History {
    let raw = match store.read(HISTORY_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return History::new(),
        Err(err) => {
            warn!("failed to read stored history, starting empty: {}", err);
            return History::new();
        }
    };
    match History::from_json(&raw) {
        Ok(history) => {
            debug!("loaded {} history records", history.len());
            history
        }
        Err(err) => {
            warn!("stored history is malformed, starting empty: {}", err);
            History::new()
        }
    }
}

/// Persistence failures leave the in-memory history authoritative for the
/// rest of the session.
pub async fn save_history(state: &AppState, history: &History) {
    let result = match history.to_json() {
        Ok(raw) => state.store.write(HISTORY_KEY, &raw).await,
        Err(err) => Err(err.into()),
    };
    if let Err(err) = result {
        state.metrics.record_storage_error();
        warn!("failed to persist history: {}", err);
    }
}

pub async fn remove_history(state: &AppState) {
    if let Err(err) = state.store.delete(HISTORY_KEY).await {
        state.metrics.record_storage_error();
        warn!("failed to remove stored history: {}", err);
    }
}

pub async fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.read(THEME_KEY).await {
        Ok(Some(raw)) => Theme::from(raw.as_str()),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("failed to read theme preference: {}", err);
            Theme::default()
        }
    }
}

/// Stored as the bare word `dark` or `light`.
pub async fn save_theme(state: &AppState, theme: Theme) {
    if let Err(err) = state.store.write(THEME_KEY, theme.as_str()).await {
        state.metrics.record_storage_error();
        warn!("failed to persist theme preference: {}", err);
    }
}
