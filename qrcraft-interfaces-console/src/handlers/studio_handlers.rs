use std::time::Duration;

use tracing::debug;

use qrcraft_application::{AppState, Intent};
use qrcraft_domain::services::validate;
use qrcraft_domain::ContentType;

use crate::error::ConsoleError;
use crate::handlers::{apply, ConsoleSession};

/// Valid input waits `generate_delay_ms` before it is recorded; invalid input
/// fails immediately. An explicit type becomes the session's input type only
/// once the value is recorded.
pub async fn generate(
    state: &AppState,
    session: &mut ConsoleSession,
    content_type: Option<ContentType>,
    value: String,
) -> Result<String, ConsoleError> {
    let content_type = content_type.unwrap_or(session.content_type);

    let delay_ms = state.config.generate_delay_ms;
    if delay_ms > 0 && validate(&value, content_type).valid {
        debug!("generating {} in {}ms", content_type, delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
    let text = apply(
        state,
        session,
        Intent::Generate {
            value,
            content_type,
        },
    )
    .await?;
    session.content_type = content_type;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::console_state;

    #[tokio::test]
    async fn failed_generate_keeps_input_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = console_state(dir.path()).await;
        let mut session = ConsoleSession {
            content_type: ContentType::Text,
            clipboard: None,
        };

        let err = generate(&state, &mut session, Some(ContentType::Url), "foo".to_string())
            .await
            .expect_err("invalid url");
        assert!(matches!(err, ConsoleError::Invalid(_)));
        assert_eq!(session.content_type, ContentType::Text);

        generate(&state, &mut session, Some(ContentType::Email), "a@b.co".to_string())
            .await
            .expect("generate");
        assert_eq!(session.content_type, ContentType::Email);
    }
}
