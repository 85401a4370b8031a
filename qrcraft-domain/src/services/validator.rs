use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::value_objects::ContentType;

pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://google.com)";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)/?$")
        .expect("url pattern")
});
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{7,15}$").expect("phone pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Checks raw input against the rule for its content type. Cheap enough to
/// run on every keystroke.
pub fn validate(value: &str, content_type: ContentType) -> ValidationResult {
    if is_blank(value) {
        return ValidationResult::invalid(EMPTY_INPUT_MESSAGE);
    }

    let (pattern, message) = match content_type {
        ContentType::Text => return ValidationResult::ok(),
        ContentType::Url => (&*URL_PATTERN, INVALID_URL_MESSAGE),
        ContentType::Email => (&*EMAIL_PATTERN, INVALID_EMAIL_MESSAGE),
        ContentType::Phone => (&*PHONE_PATTERN, INVALID_PHONE_MESSAGE),
    };
    if pattern.is_match(value) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid(message)
    }
}

// Whitespace plus the byte order mark, which `str::trim` keeps.
fn is_blank(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_whitespace() || ch == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_invalid_for_every_type() {
        for content_type in ContentType::ALL {
            for blank in ["", " ", "\t\n", "   ", "\u{feff}", " \u{feff}\u{a0} "] {
                let result = validate(blank, content_type);
                assert!(!result.valid, "{content_type} accepted {blank:?}");
                assert_eq!(result.message, EMPTY_INPUT_MESSAGE);
            }
        }
    }

    #[test]
    fn any_non_blank_text_is_valid() {
        for text in ["x", "hello world", "not a url", "🙂", "  padded  "] {
            let result = validate(text, ContentType::Text);
            assert!(result.valid);
            assert!(result.message.is_empty());
        }
    }

    #[test]
    fn url_rules() {
        for ok in [
            "https://example.com",
            "http://example.com/",
            "example.com",
            "sub.domain.co.uk/path/to_page",
            "https://google.com/search-page",
        ] {
            assert!(validate(ok, ContentType::Url).valid, "rejected {ok}");
        }
        for bad in ["not a url", "https://", "localhost", "ftp://example.com", "https://example.c"] {
            let result = validate(bad, ContentType::Url);
            assert!(!result.valid, "accepted {bad}");
            assert_eq!(result.message, INVALID_URL_MESSAGE);
        }
    }

    #[test]
    fn email_rules() {
        assert!(validate("a@b.co", ContentType::Email).valid);
        assert!(validate("first.last@mail.example.org", ContentType::Email).valid);
        for bad in ["a@b", "a b@c.de", "@b.co", "a@@b.co"] {
            let result = validate(bad, ContentType::Email);
            assert!(!result.valid, "accepted {bad}");
            assert_eq!(result.message, INVALID_EMAIL_MESSAGE);
        }
    }

    #[test]
    fn phone_rules() {
        assert!(validate("+1 234 567 890", ContentType::Phone).valid);
        assert!(validate("555-0100", ContentType::Phone).valid);
        assert!(validate("1234567", ContentType::Phone).valid);
        for bad in ["123", "+1 (234) 567", "1234567890123456", "phone me"] {
            let result = validate(bad, ContentType::Phone);
            assert!(!result.valid, "accepted {bad}");
            assert_eq!(result.message, INVALID_PHONE_MESSAGE);
        }
    }
}
