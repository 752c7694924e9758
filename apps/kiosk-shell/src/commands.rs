//! # Commands
//!
//! Parses one input line into a [`Command`].
//!
//! ## Grammar
//! ```text
//! add <product name>        dispatch Add
//! remove <product name>     dispatch Remove
//! action <json>             dispatch a raw CartAction
//! show                      print the cart summary
//! catalog | products        list what the kiosk sells
//! config                    print the active configuration
//! help                      list commands
//! quit | exit               leave
//! ```
//! Command words are case-insensitive. Product names keep their inner
//! spaces: `add ice cream` looks up `"ice cream"`.
//!
//! ## Action JSON
//! `action` takes `{"type": "add" | "remove", "product": {"name": ...}}`.
//! Only the name is read; `price` and `glyph` may be present and are
//! ignored, since the catalog decides both.

use serde::Deserialize;

use crate::error::{ShellError, ShellResult};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Action(String),
    Show,
    Catalog,
    Config,
    Help,
    Quit,
}

impl Command {
    /// Parses `line`. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> ShellResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add(required(word, rest)?),
            "remove" | "rm" => Command::Remove(required(word, rest)?),
            "action" => Command::Action(required(word, rest)?),
            "show" | "cart" => Command::Show,
            "catalog" | "products" => Command::Catalog,
            "config" => Command::Config,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

/// Product reference inside an `action` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRef {
    pub name: String,
}

/// Wire shape of the `action` command, before catalog resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionRequest {
    Add { product: ProductRef },
    Remove { product: ProductRef },
    #[serde(other)]
    Unknown,
}

impl ActionRequest {
    pub fn from_json(json: &str) -> ShellResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn required(command: &str, arg: &str) -> ShellResult<String> {
    if arg.is_empty() {
        return Err(ShellError::MissingArgument {
            command: command.to_string(),
        });
    }
    Ok(arg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_spaces_in_name() {
        assert_eq!(
            Command::parse("add ice cream").unwrap(),
            Some(Command::Add("ice cream".to_string()))
        );
        assert_eq!(
            Command::parse("  ADD   donuts  ").unwrap(),
            Some(Command::Add("donuts".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("show").unwrap(), Some(Command::Show));
        assert_eq!(Command::parse("products").unwrap(), Some(Command::Catalog));
        assert_eq!(Command::parse("config").unwrap(), Some(Command::Config));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(
            Command::parse("rm watermelon").unwrap(),
            Some(Command::Remove("watermelon".to_string()))
        );
    }

    #[test]
    fn test_parse_action_keeps_json_intact() {
        let line = r#"action {"type":"remove","product":{"name":"donuts"}}"#;
        assert_eq!(
            Command::parse(line).unwrap(),
            Some(Command::Action(
                r#"{"type":"remove","product":{"name":"donuts"}}"#.to_string()
            ))
        );
    }

    #[test]
    fn test_action_request_needs_only_a_name() {
        let request =
            ActionRequest::from_json(r#"{"type":"remove","product":{"name":"donuts"}}"#).unwrap();
        assert_eq!(
            request,
            ActionRequest::Remove {
                product: ProductRef {
                    name: "donuts".to_string()
                }
            }
        );

        let full = r#"{"type":"add","product":{"name":"donuts","price":1,"glyph":"x"}}"#;
        assert!(matches!(
            ActionRequest::from_json(full).unwrap(),
            ActionRequest::Add { product } if product.name == "donuts"
        ));
    }

    #[test]
    fn test_action_request_unknown_type() {
        assert_eq!(
            ActionRequest::from_json(r#"{"type":"checkout"}"#).unwrap(),
            ActionRequest::Unknown
        );
        assert!(matches!(
            ActionRequest::from_json(r#"{"type":"add"}"#),
            Err(ShellError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Command::parse("add"),
            Err(ShellError::MissingArgument { .. })
        ));
        assert!(matches!(
            Command::parse("buy donuts"),
            Err(ShellError::UnknownCommand(ref w)) if w == "buy"
        ));
    }
}
