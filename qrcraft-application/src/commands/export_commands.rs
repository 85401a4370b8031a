use anyhow::Context;
use qrcraft_domain::{ClipboardImage, ExportFormat, GenerationRecord, QrBitmap};
use tracing::debug;

use crate::{AppError, AppState};

#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encodes the active record's value with the configured QR settings.
pub async fn render_active(state: &AppState) -> Result<(GenerationRecord, QrBitmap), AppError> {
    let record = state
        .session
        .lock()
        .await
        .active_record()
        .cloned()
        .ok_or_else(|| AppError::NotFound("no active QR code".to_string()))?;
    let bitmap = state
        .encoder
        .encode(record.value(), &state.config.qr)
        .with_context(|| format!("failed to encode record {}", record.id()))?;
    debug!(
        "rendered record {} at {}x{} (level {})",
        record.id(),
        bitmap.width,
        bitmap.height,
        state.config.qr.error_correction
    );
    Ok((record, bitmap))
}

pub async fn export_active(state: &AppState, format: ExportFormat) -> Result<ExportedImage, AppError> {
    let (_, bitmap) = render_active(state).await?;
    let bytes = state
        .exporter
        .export(&bitmap, format)
        .with_context(|| format!("failed to export {} image", format.extension()))?;
    Ok(ExportedImage {
        file_name: format.file_name(state.clock.now_millis()),
        mime_type: format.mime_type(),
        bytes,
    })
}

/// PNG payload for the system clipboard.
pub async fn copy_active(state: &AppState) -> Result<ClipboardImage, AppError> {
    let exported = export_active(state, ExportFormat::Png).await?;
    Ok(ClipboardImage {
        mime_type: exported.mime_type,
        bytes: exported.bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::history_commands::{deselect, generate};
    use crate::test_support::test_state;
    use qrcraft_domain::ContentType;

    #[tokio::test]
    async fn rendering_requires_an_active_record() {
        let (state, _store) = test_state().await;
        let err = render_active(&state).await.expect_err("nothing active");
        assert!(matches!(err, AppError::NotFound(_)));

        generate(&state, "hi there", ContentType::Text).await.expect("generate");
        deselect(&state).await;
        assert!(render_active(&state).await.is_err());
    }

    #[tokio::test]
    async fn export_names_file_by_format() {
        let (state, _store) = test_state().await;
        generate(&state, "hi there", ContentType::Text).await.expect("generate");

        let (record, bitmap) = render_active(&state).await.expect("render");
        assert_eq!(record.value(), "hi there");
        assert_eq!(bitmap.width, 8);

        let png = export_active(&state, ExportFormat::Png).await.expect("png");
        assert!(png.file_name.starts_with("qrcraft-"));
        assert!(png.file_name.ends_with(".png"));
        assert_eq!(png.mime_type, "image/png");

        let jpg = export_active(&state, ExportFormat::Jpeg).await.expect("jpg");
        assert!(jpg.file_name.ends_with(".jpg"));

        let clip = copy_active(&state).await.expect("clipboard");
        assert_eq!(clip.mime_type, "image/png");
        assert!(clip.bytes.starts_with(b"png"));
    }
}
