//! Console command parsing
//!
//! Every line typed at the prompt (or read from a script) is one
//! [`ConsoleCommand`]: a page event, a pause or a session command.

use folio_domain::{FieldId, Key, TileId, TileKind, UiEvent};
use std::time::Duration;
use thiserror::Error;

/// Errors from parsing a console line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{command}': '{value}' is not a valid number")]
    InvalidNumber {
        command: &'static str,
        value: String,
    },

    #[error("Unknown tile kind '{0}' (expected skill or project)")]
    InvalidTile(String),
}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Dispatch a page event
    Event(UiEvent),
    /// Let time pass
    Wait(Duration),
    /// Print the current page state
    Status,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parse a console line.
    ///
    /// Blank lines and lines starting with `#` are not commands; callers
    /// should skip them (see [`is_comment`]).
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let event = match name.to_lowercase().as_str() {
            "" => return Err(CommandParseError::Empty),
            "focus" => UiEvent::FieldFocused(field_arg("focus", rest)?),
            "blur" => UiEvent::FieldBlurred(field_arg("blur", rest)?),
            "type" => {
                let (index, text) = match rest.split_once(char::is_whitespace) {
                    Some((index, text)) => (index, text),
                    None => (rest, ""),
                };
                UiEvent::FieldInput {
                    field: field_arg("type", index)?,
                    value: text.to_string(),
                }
            }
            "enter" => UiEvent::KeyPressed {
                field: if rest.is_empty() {
                    None
                } else {
                    Some(field_arg("enter", rest)?)
                },
                key: Key::Enter,
            },
            "esc" | "escape" => UiEvent::KeyPressed {
                field: None,
                key: Key::Escape,
            },
            "submit" => UiEvent::SubmitClicked,
            "menu" => UiEvent::MenuButtonClicked,
            "overlay" => UiEvent::OverlayClicked,
            "link" => UiEvent::NavLinkClicked {
                href: text_arg("link", "an href", rest)?,
            },
            "goto" => UiEvent::AnchorClicked {
                href: text_arg("goto", "an href", rest)?,
            },
            "scroll" => UiEvent::Scrolled {
                y: number_arg("scroll", "a scroll offset", rest)?,
            },
            "hover" => UiEvent::TileEntered(tile_arg("hover", rest)?),
            "leave" => UiEvent::TileLeft(tile_arg("leave", rest)?),
            "click" => UiEvent::TileClicked(tile_arg("click", rest)?),
            "wait" => {
                let ms: u64 = number_arg("wait", "milliseconds", rest)?;
                return Ok(ConsoleCommand::Wait(Duration::from_millis(ms)));
            }
            "status" => return Ok(ConsoleCommand::Status),
            "help" | "?" => return Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),
            _ => return Err(CommandParseError::UnknownCommand(name.to_string())),
        };

        Ok(ConsoleCommand::Event(event))
    }
}

/// True for lines that carry no command
pub fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Help text listing every command
pub const HELP: &str = "\
Contact form:
  focus N            focus field N (fields are numbered from 0)
  blur N             leave field N
  type N TEXT        set the value of field N
  enter [N]          press Enter (in the last field it submits)
  submit             click the submit button
Navigation:
  menu               toggle the mobile menu
  overlay            click the menu overlay
  esc                press Escape
  link HREF          click a nav link, e.g. link #about
  goto HREF          click any in-page anchor
  scroll Y           scroll the window to Y px
Tiles:
  hover skill|project N
  leave skill|project N
  click skill|project N
Session:
  wait MS            let MS milliseconds pass
  status             show the page state
  help               show this help
  quit               leave";

fn text_arg(
    command: &'static str,
    argument: &'static str,
    rest: &str,
) -> Result<String, CommandParseError> {
    if rest.is_empty() {
        return Err(CommandParseError::MissingArgument { command, argument });
    }
    Ok(rest.to_string())
}

fn number_arg<T: std::str::FromStr>(
    command: &'static str,
    argument: &'static str,
    rest: &str,
) -> Result<T, CommandParseError> {
    let raw = text_arg(command, argument, rest)?;
    raw.parse().map_err(|_| CommandParseError::InvalidNumber {
        command,
        value: raw,
    })
}

fn field_arg(command: &'static str, rest: &str) -> Result<FieldId, CommandParseError> {
    number_arg(command, "a field number", rest).map(FieldId)
}

fn tile_arg(command: &'static str, rest: &str) -> Result<TileId, CommandParseError> {
    let mut parts = rest.split_whitespace();
    let kind = parts.next().ok_or(CommandParseError::MissingArgument {
        command,
        argument: "skill or project",
    })?;
    let kind: TileKind = kind
        .parse()
        .map_err(|_| CommandParseError::InvalidTile(kind.to_string()))?;
    let index = number_arg(command, "a tile number", parts.next().unwrap_or(""))?;
    Ok(TileId { kind, index })
}
