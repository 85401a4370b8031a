use qrcraft_domain::Theme;
use tracing::info;

use crate::persistence;
use crate::AppState;

pub async fn set_theme(state: &AppState, theme: Theme) {
    let mut current = state.theme.write().await;
    *current = theme;
    persistence::save_theme(state, theme).await;
    info!("theme set to {}", theme.as_str());
}

pub async fn toggle_theme(state: &AppState) -> Theme {
    let mut current = state.theme.write().await;
    let theme = current.toggled();
    *current = theme;
    persistence::save_theme(state, theme).await;
    info!("theme set to {}", theme.as_str());
    theme
}
