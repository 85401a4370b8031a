use anyhow::{anyhow, Result};

use qrcraft_domain::{Color, ErrorCorrectionLevel};

pub fn validate_color(field: &str, value: &str) -> Result<Color> {
    value
        .parse::<Color>()
        .map_err(|err| anyhow!("invalid {}: {}", field, err))
}

pub fn validate_error_correction(value: &str) -> Result<ErrorCorrectionLevel> {
    ErrorCorrectionLevel::parse(value)
        .ok_or_else(|| anyhow!("invalid error_correction '{}', expected one of L, M, Q, H", value))
}
