use std::io::Cursor;

use anyhow::{anyhow, Result};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};

use qrcraft_domain::ports::{ImageExporter, QrEncoder};
use qrcraft_domain::{ErrorCorrectionLevel, ExportFormat, QrBitmap, QrConfig};

/// Encodes with the `qrcode` crate and exports through `image`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeRenderer;

impl QrCodeRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}

impl QrEncoder for QrCodeRenderer {
    fn encode(&self, text: &str, config: &QrConfig) -> Result<QrBitmap> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(config.error_correction))
            .map_err(|err| anyhow!("failed to encode QR code: {}", err))?;
        let image: RgbImage = code
            .render::<Rgb<u8>>()
            .dark_color(Rgb(config.foreground.0))
            .light_color(Rgb(config.background.0))
            .quiet_zone(config.include_margin)
            .min_dimensions(config.size_px, config.size_px)
            .build();
        Ok(QrBitmap {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        })
    }
}

impl ImageExporter for QrCodeRenderer {
    fn export(&self, bitmap: &QrBitmap, format: ExportFormat) -> Result<Vec<u8>> {
        let buffer = RgbImage::from_raw(bitmap.width, bitmap.height, bitmap.pixels.clone())
            .ok_or_else(|| anyhow!("bitmap dimensions do not match its pixel data"))?;
        let image_format = match format {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        };
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(buffer).write_to(&mut out, image_format)?;
        Ok(out.into_inner())
    }
}
