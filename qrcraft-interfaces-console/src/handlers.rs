pub mod export_handlers;
pub mod studio_handlers;
pub mod view_handlers;

use qrcraft_application::{dispatch, AppState, Intent, IntentOutcome};
use qrcraft_application::queries::history_queries;
use qrcraft_domain::{ClipboardImage, ContentType};

use crate::error::ConsoleError;
use crate::render;
use crate::routes::{Command, ThemeChoice, HELP_TEXT};

/// Per-terminal state that never reaches durable storage.
#[derive(Debug, Default)]
pub struct ConsoleSession {
    pub content_type: ContentType,
    pub clipboard: Option<ClipboardImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub async fn handle(
    state: &AppState,
    session: &mut ConsoleSession,
    command: Command,
) -> Result<Reply, ConsoleError> {
    let text = match command {
        Command::Generate {
            content_type,
            value,
        } => studio_handlers::generate(state, session, content_type, value).await?,
        Command::Validate {
            content_type,
            value,
        } => {
            let content_type = content_type.unwrap_or(session.content_type);
            apply(state, session, Intent::Validate { value, content_type }).await?
        }
        Command::SetType(content_type) => {
            session.content_type = content_type;
            view_handlers::show_type(session)
        }
        Command::ShowType => view_handlers::show_type(session),
        Command::Scan(device) => {
            let record = history_queries::active_record(state).await.ok_or_else(|| {
                ConsoleError::NotFound("no active QR code, generate or select one first".to_string())
            })?;
            let intent = Intent::SimulateScan {
                record_id: record.id(),
                device,
            };
            apply(state, session, intent).await?
        }
        Command::Select(value) => apply(state, session, Intent::Select { value }).await?,
        Command::New => apply(state, session, Intent::Deselect).await?,
        Command::History => view_handlers::show_history(state).await,
        Command::Show => view_handlers::show_active(state).await?,
        Command::Analytics => view_handlers::show_analytics(state).await?,
        Command::Export(format) => apply(state, session, Intent::Export(format)).await?,
        Command::Copy => apply(state, session, Intent::CopyImage).await?,
        Command::Clear => apply(state, session, Intent::Clear).await?,
        Command::Theme(ThemeChoice::Show) => {
            format!("Theme: {}", state.theme.read().await.as_str())
        }
        Command::Theme(ThemeChoice::Set(theme)) => {
            apply(state, session, Intent::SetTheme(theme)).await?
        }
        Command::Theme(ThemeChoice::Toggle) => apply(state, session, Intent::ToggleTheme).await?,
        Command::Stats => view_handlers::show_stats(state).await,
        Command::Help => HELP_TEXT.to_string(),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Text(text))
}

/// Dispatches one intent and turns its outcome into console output.
pub(crate) async fn apply(
    state: &AppState,
    session: &mut ConsoleSession,
    intent: Intent,
) -> Result<String, ConsoleError> {
    let outcome = dispatch(state, intent).await?;
    let text = match outcome {
        IntentOutcome::Validated(result) => {
            if result.valid {
                "Looks good.".to_string()
            } else {
                return Err(ConsoleError::Invalid(result.message));
            }
        }
        IntentOutcome::Generated(outcome) => render::generated(&outcome),
        IntentOutcome::Scanned { record_id, event } => match event {
            Some(event) => {
                let total = history_queries::get_record(state, record_id)
                    .await
                    .map(|record| record.scan_count())
                    .unwrap_or_default();
                render::scan(&event, total)
            }
            None => "That QR code is no longer in history, scan ignored.".to_string(),
        },
        IntentOutcome::Selected(record) => render::record(&record),
        IntentOutcome::Deselected => "Ready for a new QR code.".to_string(),
        IntentOutcome::Cleared => "History cleared.".to_string(),
        IntentOutcome::ThemeChanged(theme) => format!("Theme: {}", theme.as_str()),
        IntentOutcome::Exported(image) => {
            let path = export_handlers::write_export(&state.config.export_dir, &image).await?;
            format!("Saved {} ({} bytes)", path.display(), image.bytes.len())
        }
        IntentOutcome::Copied(image) => export_handlers::store_clipboard(session, image),
    };
    Ok(text)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::sync::Arc;

    use qrcraft_application::{Adapters, AppState};
    use qrcraft_domain::{QrConfig, RuntimeConfig};
    use qrcraft_infrastructure::{MemoryKeyValueStore, QrCodeRenderer, SeededRandom, SystemClock};

    pub async fn console_state(export_dir: &Path) -> AppState {
        let config = RuntimeConfig {
            data_dir: String::new(),
            export_dir: export_dir.to_string_lossy().to_string(),
            qr: QrConfig {
                size_px: 64,
                ..QrConfig::default()
            },
            generate_delay_ms: 0,
        };
        let adapters = Adapters {
            store: Arc::new(MemoryKeyValueStore::new()),
            clock: Arc::new(SystemClock),
            encoder: Arc::new(QrCodeRenderer),
            exporter: Arc::new(QrCodeRenderer),
            random: Box::new(SeededRandom::new(11)),
        };
        AppState::initialize(config, adapters).await
    }
}
