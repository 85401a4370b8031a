use qrcraft_domain::services::validate;
use qrcraft_domain::{
    ClipboardImage, ContentType, Device, ExportFormat, GenerationOutcome, GenerationRecord,
    RecordId, ScanEvent, Theme, ValidationResult,
};

use crate::commands::export_commands::{self, ExportedImage};
use crate::commands::{history_commands, scan_commands, theme_commands};
use crate::{AppError, AppState};

/// One discrete user action. Intents are applied one at a time, each
/// running to completion (durable write included) before the next starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Validate {
        value: String,
        content_type: ContentType,
    },
    Generate {
        value: String,
        content_type: ContentType,
    },
    SimulateScan {
        record_id: RecordId,
        device: Option<Device>,
    },
    Select {
        value: String,
    },
    Deselect,
    Clear,
    SetTheme(Theme),
    ToggleTheme,
    Export(ExportFormat),
    CopyImage,
}

#[derive(Debug)]
pub enum IntentOutcome {
    Validated(ValidationResult),
    Generated(GenerationOutcome),
    Scanned {
        record_id: RecordId,
        event: Option<ScanEvent>,
    },
    Selected(GenerationRecord),
    Deselected,
    Cleared,
    ThemeChanged(Theme),
    Exported(ExportedImage),
    Copied(ClipboardImage),
}

pub async fn dispatch(state: &AppState, intent: Intent) -> Result<IntentOutcome, AppError> {
    match intent {
        Intent::Validate {
            value,
            content_type,
        } => Ok(IntentOutcome::Validated(validate(&value, content_type))),
        Intent::Generate {
            value,
            content_type,
        } => history_commands::generate(state, &value, content_type)
            .await
            .map(IntentOutcome::Generated),
        Intent::SimulateScan { record_id, device } => {
            let event = scan_commands::simulate_scan(state, record_id, device).await?;
            Ok(IntentOutcome::Scanned { record_id, event })
        }
        Intent::Select { value } => history_commands::select_from_history(state, &value)
            .await
            .map(IntentOutcome::Selected),
        Intent::Deselect => {
            history_commands::deselect(state).await;
            Ok(IntentOutcome::Deselected)
        }
        Intent::Clear => {
            history_commands::clear_history(state).await;
            Ok(IntentOutcome::Cleared)
        }
        Intent::SetTheme(theme) => {
            theme_commands::set_theme(state, theme).await;
            Ok(IntentOutcome::ThemeChanged(theme))
        }
        Intent::ToggleTheme => Ok(IntentOutcome::ThemeChanged(
            theme_commands::toggle_theme(state).await,
        )),
        Intent::Export(format) => export_commands::export_active(state, format)
            .await
            .map(IntentOutcome::Exported),
        Intent::CopyImage => export_commands::copy_active(state)
            .await
            .map(IntentOutcome::Copied),
    }
}
