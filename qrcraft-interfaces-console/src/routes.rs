// Maps one console line onto a Command.

use qrcraft_domain::{ContentType, Device, ExportFormat, Theme};

use crate::error::ConsoleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeChoice {
    Show,
    Set(Theme),
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` means "use the currently selected content type".
    Generate {
        content_type: Option<ContentType>,
        value: String,
    },
    Validate {
        content_type: Option<ContentType>,
        value: String,
    },
    SetType(ContentType),
    ShowType,
    Scan(Option<Device>),
    Select(String),
    New,
    History,
    Show,
    Analytics,
    Export(ExportFormat),
    Copy,
    Clear,
    Theme(ThemeChoice),
    Stats,
    Help,
    Quit,
}

/// Returns `Ok(None)` for blank lines.
///
/// Values (`generate`, `validate`, `select`) are everything after the single
/// separator following the verb or type word, whitespace included. Keyword
/// arguments are trimmed.
pub fn parse_command(line: &str) -> Result<Option<Command>, ConsoleError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (verb, raw) = match line.trim_start().split_once(char::is_whitespace) {
        Some((verb, raw)) => (verb, raw),
        None => (line.trim_start(), ""),
    };
    let rest = raw.trim();

    let command = match verb.to_lowercase().as_str() {
        "generate" | "gen" | "g" => {
            let (content_type, value) = split_typed_value(raw);
            if value.is_empty() {
                return Err(usage("generate [url|text|email|phone] <value>"));
            }
            Command::Generate {
                content_type,
                value: value.to_string(),
            }
        }
        "validate" | "check" => {
            let (content_type, value) = split_typed_value(raw);
            Command::Validate {
                content_type,
                value: value.to_string(),
            }
        }
        "type" => {
            if rest.is_empty() {
                Command::ShowType
            } else {
                let content_type = rest
                    .parse::<ContentType>()
                    .map_err(|err| ConsoleError::Usage(err.to_string()))?;
                Command::SetType(content_type)
            }
        }
        "scan" => {
            if rest.is_empty() {
                Command::Scan(None)
            } else {
                let device = rest
                    .parse::<Device>()
                    .map_err(|err| ConsoleError::Usage(err.to_string()))?;
                Command::Scan(Some(device))
            }
        }
        "select" | "open" => {
            if raw.is_empty() {
                return Err(usage("select <value>"));
            }
            Command::Select(raw.to_string())
        }
        "new" => Command::New,
        "history" | "ls" => Command::History,
        "show" => Command::Show,
        "analytics" => Command::Analytics,
        "export" | "download" => {
            let format = if rest.is_empty() {
                ExportFormat::Png
            } else {
                rest.parse::<ExportFormat>()
                    .map_err(|err| ConsoleError::Usage(err.to_string()))?
            };
            Command::Export(format)
        }
        "copy" => Command::Copy,
        "clear" => Command::Clear,
        "theme" => match rest.to_lowercase().as_str() {
            "" => Command::Theme(ThemeChoice::Show),
            "dark" => Command::Theme(ThemeChoice::Set(Theme::Dark)),
            "light" => Command::Theme(ThemeChoice::Set(Theme::Light)),
            "toggle" => Command::Theme(ThemeChoice::Toggle),
            _ => return Err(usage("theme [dark|light|toggle]")),
        },
        "stats" => Command::Stats,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(ConsoleError::Usage(format!(
                "unknown command '{}', type 'help' for a list",
                other
            )))
        }
    };
    Ok(Some(command))
}

/// Treats the first word as a content type only when more text follows it.
fn split_typed_value(raw: &str) -> (Option<ContentType>, &str) {
    if let Some((head, tail)) = raw.split_once(char::is_whitespace) {
        if !tail.is_empty() {
            if let Ok(content_type) = head.parse::<ContentType>() {
                return (Some(content_type), tail);
            }
        }
    }
    (None, raw)
}

fn usage(text: &str) -> ConsoleError {
    ConsoleError::Usage(text.to_string())
}

pub const HELP_TEXT: &str = "\
commands:
  generate [url|text|email|phone] <value>   validate and add to history
  validate [type] <value>                   check input without generating
  type [url|text|email|phone]               show or change the input type
  scan [mobile|desktop|tablet]              simulate a scan of the active code
  select <value>                            reopen a history entry
  new                                       close the active code
  history                                   list recent codes
  show                                      details of the active code
  analytics                                 scan analytics of the active code
  export [png|jpg]                          write the active code to a file
  copy                                      copy the active code as PNG
  clear                                     delete all history
  theme [dark|light|toggle]                 show or change the theme
  stats                                     session counters
  quit                                      leave

A leading url/text/email/phone word is read as the type when more text
follows it; write `generate text url shortener tips` to encode a value that
starts with a type word. Values are kept exactly as typed after the single
space that ends the verb or type word.";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_command(line).expect("parse").expect("command")
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   ").expect("parse"), None);
    }

    #[test]
    fn generate_with_explicit_type_keeps_inner_spaces() {
        assert_eq!(
            parse("generate phone +1 234 567 890"),
            Command::Generate {
                content_type: Some(ContentType::Phone),
                value: "+1 234 567 890".to_string(),
            }
        );
    }

    #[test]
    fn generate_without_type_uses_whole_rest() {
        assert_eq!(
            parse("gen https://a.com"),
            Command::Generate {
                content_type: None,
                value: "https://a.com".to_string(),
            }
        );
        // a lone type word is the value itself
        assert_eq!(
            parse("generate text"),
            Command::Generate {
                content_type: None,
                value: "text".to_string(),
            }
        );
    }

    #[test]
    fn generate_keeps_value_whitespace() {
        assert_eq!(
            parse("generate text   two  spaces  "),
            Command::Generate {
                content_type: Some(ContentType::Text),
                value: "  two  spaces  ".to_string(),
            }
        );
        assert_eq!(
            parse("select  padded "),
            Command::Select(" padded ".to_string())
        );
    }

    #[test]
    fn leading_type_word_needs_explicit_type_to_be_a_value() {
        assert_eq!(
            parse("generate url shortener tips"),
            Command::Generate {
                content_type: Some(ContentType::Url),
                value: "shortener tips".to_string(),
            }
        );
        assert_eq!(
            parse("generate text url shortener tips"),
            Command::Generate {
                content_type: Some(ContentType::Text),
                value: "url shortener tips".to_string(),
            }
        );
        assert!(HELP_TEXT.contains("generate text url shortener tips"));
    }

    #[test]
    fn generate_requires_a_value() {
        assert!(matches!(parse_command("generate"), Err(ConsoleError::Usage(_))));
    }

    #[test]
    fn validate_allows_empty_value() {
        assert_eq!(
            parse("validate email"),
            Command::Validate {
                content_type: None,
                value: "email".to_string(),
            }
        );
        assert_eq!(
            parse("validate"),
            Command::Validate {
                content_type: None,
                value: String::new(),
            }
        );
    }

    #[test]
    fn scan_device_is_optional() {
        assert_eq!(parse("scan"), Command::Scan(None));
        assert_eq!(parse("scan Tablet"), Command::Scan(Some(Device::Tablet)));
        assert!(parse_command("scan toaster").is_err());
    }

    #[test]
    fn export_defaults_to_png() {
        assert_eq!(parse("export"), Command::Export(ExportFormat::Png));
        assert_eq!(parse("export jpg"), Command::Export(ExportFormat::Jpeg));
        assert!(parse_command("export gif").is_err());
    }

    #[test]
    fn theme_variants() {
        assert_eq!(parse("theme"), Command::Theme(ThemeChoice::Show));
        assert_eq!(parse("theme DARK"), Command::Theme(ThemeChoice::Set(Theme::Dark)));
        assert_eq!(parse("theme toggle"), Command::Theme(ThemeChoice::Toggle));
        assert!(parse_command("theme blue").is_err());
    }

    #[test]
    fn type_and_misc_commands() {
        assert_eq!(parse("type mail"), Command::SetType(ContentType::Email));
        assert_eq!(parse("type"), Command::ShowType);
        assert_eq!(parse("select hello world"), Command::Select("hello world".to_string()));
        assert_eq!(parse("QUIT"), Command::Quit);
        assert!(matches!(parse_command("frobnicate"), Err(ConsoleError::Usage(_))));
    }
}
