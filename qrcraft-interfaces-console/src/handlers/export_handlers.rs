use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use qrcraft_application::commands::export_commands::ExportedImage;
use qrcraft_domain::ClipboardImage;

use crate::error::ConsoleError;
use crate::handlers::ConsoleSession;

pub async fn write_export(export_dir: &str, image: &ExportedImage) -> Result<PathBuf, ConsoleError> {
    let dir = Path::new(export_dir);
    fs::create_dir_all(dir)
        .await
        .map_err(|err| ConsoleError::Internal(format!("cannot create {}: {}", dir.display(), err)))?;
    let path = dir.join(&image.file_name);
    fs::write(&path, &image.bytes)
        .await
        .map_err(|err| ConsoleError::Internal(format!("cannot write {}: {}", path.display(), err)))?;
    info!("exported {} ({})", path.display(), image.mime_type);
    Ok(path)
}

/// A terminal has no image clipboard; the payload is kept on the session.
pub fn store_clipboard(session: &mut ConsoleSession, image: ClipboardImage) -> String {
    let text = format!("Copied QR code to clipboard ({}, {} bytes)", image.mime_type, image.bytes.len());
    session.clipboard = Some(image);
    text
}
