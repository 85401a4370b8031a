use thiserror::Error;

use qrcraft_application::AppError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<AppError> for ConsoleError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Validation(msg) => ConsoleError::Invalid(msg),
            AppError::NotFound(msg) => ConsoleError::NotFound(msg),
            AppError::BadRequest(msg) => ConsoleError::Usage(msg),
            AppError::Internal(err) => ConsoleError::Internal(format!("{:#}", err)),
        }
    }
}

impl ConsoleError {
    /// One line suitable for printing back to the user.
    pub fn render(&self) -> String {
        match self {
            ConsoleError::Usage(msg) => format!("usage: {}", msg),
            ConsoleError::Invalid(msg) => format!("! {}", msg),
            ConsoleError::NotFound(msg) => format!("not found: {}", msg),
            ConsoleError::Internal(msg) => format!("error: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let err: ConsoleError = AppError::Validation("Please enter a valid email address".to_string()).into();
        assert_eq!(err.render(), "! Please enter a valid email address");
    }

    #[test]
    fn bad_requests_render_as_usage() {
        let err: ConsoleError = AppError::BadRequest("select needs the value of a history entry".to_string()).into();
        assert!(matches!(err, ConsoleError::Usage(_)));
        assert_eq!(err.render(), "usage: select needs the value of a history entry");
    }

    #[test]
    fn internal_errors_include_context_chain() {
        let inner = anyhow::anyhow!("disk full").context("failed to export png image");
        let err: ConsoleError = AppError::Internal(inner).into();
        assert_eq!(err.render(), "error: failed to export png image: disk full");
    }
}
