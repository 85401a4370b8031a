// QR rendering entities

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::value_objects::ErrorCorrectionLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0x00, 0x00, 0x00]);
    pub const WHITE: Color = Color([0xff, 0xff, 0xff]);
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(anyhow!("invalid color '{}', expected #rrggbb", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|err| anyhow!(err))
        };
        Ok(Color([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrConfig {
    pub size_px: u32,
    pub foreground: Color,
    pub background: Color,
    pub error_correction: ErrorCorrectionLevel,
    pub include_margin: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size_px: 512,
            foreground: Color::BLACK,
            background: Color::WHITE,
            error_correction: ErrorCorrectionLevel::H,
            include_margin: true,
        }
    }
}

/// Packed RGB8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl QrBitmap {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 3) as usize;
        let rgb = self.pixels.get(offset..offset + 3)?;
        Some(Color([rgb[0], rgb[1], rgb[2]]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn file_name(&self, timestamp: i64) -> String {
        format!("qrcraft-{}.{}", timestamp, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            other => Err(anyhow!("unsupported export format '{}'", other)),
        }
    }
}

/// Payload handed to the system clipboard.
#[derive(Debug, Clone)]
pub struct ClipboardImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}
