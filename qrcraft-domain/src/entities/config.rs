// Runtime configuration entity

use crate::entities::QrConfig;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub data_dir: String,
    pub export_dir: String,
    pub qr: QrConfig,
    pub generate_delay_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            export_dir: ".".to_string(),
            qr: QrConfig::default(),
            generate_delay_ms: 600,
        }
    }
}
