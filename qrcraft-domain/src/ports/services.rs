use crate::entities::{ExportFormat, QrBitmap, QrConfig};

pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

pub trait RandomSource: Send {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

pub trait QrEncoder: Send + Sync {
    fn encode(&self, text: &str, config: &QrConfig) -> anyhow::Result<QrBitmap>;
}

pub trait ImageExporter: Send + Sync {
    fn export(&self, bitmap: &QrBitmap, format: ExportFormat) -> anyhow::Result<Vec<u8>>;
}
