use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use qrcraft_domain::{QrConfig, RuntimeConfig};

use super::validation::{validate_color, validate_error_correction};

const MIN_QR_SIZE: u32 = 64;
const MAX_QR_SIZE: u32 = 4096;
const MAX_GENERATE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: String,
    pub export_dir: String,
    pub qr_size: u32,
    pub foreground: String,
    pub background: String,
    pub error_correction: String,
    pub include_margin: bool,
    pub generate_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            export_dir: ".".to_string(),
            qr_size: 512,
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
            error_correction: "H".to_string(),
            include_margin: true,
            generate_delay_ms: 600,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `QRCRAFT_CONFIG`, or `./qrcraft.toml`.
    pub async fn load() -> Result<Self> {
        let path = env::var("QRCRAFT_CONFIG").unwrap_or_else(|_| "./qrcraft.toml".to_string());
        Self::load_from(Path::new(&path)).await
    }

    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml_str(&content)?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_overrides(|name| env::var(name).ok());
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        self.foreground = self.foreground.trim().to_lowercase();
        self.background = self.background.trim().to_lowercase();
        self.error_correction = self.error_correction.trim().to_uppercase();
        if self.data_dir.trim().is_empty() {
            self.data_dir = AppConfig::default().data_dir;
        }
        if self.export_dir.trim().is_empty() {
            self.export_dir = AppConfig::default().export_dir;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
        self.export_dir = resolve_path(base, &self.export_dir);
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_QR_SIZE..=MAX_QR_SIZE).contains(&self.qr_size) {
            return Err(anyhow!(
                "qr_size must be between {} and {}",
                MIN_QR_SIZE,
                MAX_QR_SIZE
            ));
        }
        validate_color("foreground", &self.foreground)?;
        validate_color("background", &self.background)?;
        validate_error_correction(&self.error_correction)?;
        if self.generate_delay_ms > MAX_GENERATE_DELAY_MS {
            return Err(anyhow!(
                "generate_delay_ms must be at most {}",
                MAX_GENERATE_DELAY_MS
            ));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> Result<RuntimeConfig> {
        Ok(RuntimeConfig {
            data_dir: self.data_dir.clone(),
            export_dir: self.export_dir.clone(),
            qr: QrConfig {
                size_px: self.qr_size,
                foreground: validate_color("foreground", &self.foreground)?,
                background: validate_color("background", &self.background)?,
                error_correction: validate_error_correction(&self.error_correction)?,
                include_margin: self.include_margin,
            },
            generate_delay_ms: self.generate_delay_ms,
        })
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("QRCRAFT_DATA_DIR") {
            self.data_dir = value;
        }
        if let Some(value) = lookup("QRCRAFT_EXPORT_DIR") {
            self.export_dir = value;
        }
        if let Some(value) = lookup("QRCRAFT_QR_SIZE") {
            self.qr_size = value.parse().unwrap_or(self.qr_size);
        }
        if let Some(value) = lookup("QRCRAFT_FOREGROUND") {
            self.foreground = value;
        }
        if let Some(value) = lookup("QRCRAFT_BACKGROUND") {
            self.background = value;
        }
        if let Some(value) = lookup("QRCRAFT_ERROR_CORRECTION") {
            self.error_correction = value;
        }
        if let Some(value) = lookup("QRCRAFT_INCLUDE_MARGIN") {
            self.include_margin = value.parse().unwrap_or(self.include_margin);
        }
        if let Some(value) = lookup("QRCRAFT_GENERATE_DELAY_MS") {
            self.generate_delay_ms = value.parse().unwrap_or(self.generate_delay_ms);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        PathBuf::from(base).join(path).to_string_lossy().to_string()
    }
}
