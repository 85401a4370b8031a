// Content type value object
// Classifies the text being encoded; drives validation and placeholder text

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    #[default]
    Url,
    Text,
    Email,
    Phone,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content type '{0}' (expected url, text, email or phone)")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Url,
        ContentType::Text,
        ContentType::Email,
        ContentType::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Url => "URL",
            ContentType::Text => "TEXT",
            ContentType::Email => "EMAIL",
            ContentType::Phone => "PHONE",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContentType::Url => "https://example.com",
            ContentType::Email => "hello@example.com",
            ContentType::Phone => "+1 234 567 890",
            ContentType::Text => "Enter any text or message...",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "url" | "link" => Ok(ContentType::Url),
            "text" => Ok(ContentType::Text),
            "email" | "mail" => Ok(ContentType::Email),
            "phone" | "tel" => Ok(ContentType::Phone),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}
