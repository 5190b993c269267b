// SPDX-License-Identifier: GPL-3.0-only

//! Line protocol for feeding raw key events to the tester.
//!
//! Each line holds one command:
//!
//! | Line             | Effect                                   |
//! |------------------|------------------------------------------|
//! | `models`         | list selectable models                   |
//! | `select <id>`    | switch keyboard model                    |
//! | `down <code>`    | key-down for a physical key code         |
//! | `up <code>`      | key-up for a physical key code           |
//! | `press <code>`   | key-down followed by key-up              |
//! | `clear`          | reset every key to never pressed         |
//! | `states`         | print the state snapshot as JSON         |
//! | `show`           | repaint the keyboard                     |
//! | `summary`        | print counts and untested keys           |
//! | `quit`           | end the session                          |
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fmt;

use crate::app::Message;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the tester.
    Tester(Message),
    /// Key-down then key-up for the same code.
    Press(String),
    Models,
    States,
    Show,
    Summary,
    Quit,
}

/// Errors from parsing an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The first word is not a known command
    UnknownCommand(String),
    /// The command needs an argument that was not given
    MissingArgument {
        /// The command missing its argument
        command: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownCommand(word) => write!(f, "Unknown command '{}'", word),
            InputError::MissingArgument { command } => {
                write!(f, "Command '{}' needs an argument", command)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses one line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();

    let needs_arg = |make: fn(String) -> Command| {
        argument
            .map(|arg| make(arg.to_string()))
            .ok_or_else(|| InputError::MissingArgument {
                command: command.to_string(),
            })
    };

    let parsed = match command {
        "select" => needs_arg(|id| Command::Tester(Message::SelectModel(id)))?,
        "down" => needs_arg(|id| Command::Tester(Message::KeyDown(id)))?,
        "up" => needs_arg(|id| Command::Tester(Message::KeyUp(id)))?,
        "press" => needs_arg(Command::Press)?,
        "clear" => Command::Tester(Message::ClearAll),
        "models" => Command::Models,
        "states" => Command::States,
        "show" => Command::Show,
        "summary" => Command::Summary,
        "quit" | "exit" => Command::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_events() {
        assert_eq!(
            parse_command("down KeyQ"),
            Ok(Some(Command::Tester(Message::KeyDown("KeyQ".into()))))
        );
        assert_eq!(
            parse_command("  up   ShiftLeft  "),
            Ok(Some(Command::Tester(Message::KeyUp("ShiftLeft".into()))))
        );
        assert_eq!(parse_command("press Fn"), Ok(Some(Command::Press("Fn".into()))));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# warm-up sequence"), Ok(None));
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            parse_command("select"),
            Err(InputError::MissingArgument {
                command: "select".into()
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command("type hello").unwrap_err();
        assert_eq!(err, InputError::UnknownCommand("type".into()));
        assert_eq!(err.to_string(), "Unknown command 'type'");
    }

    #[test]
    fn test_argumentless_commands() {
        assert_eq!(parse_command("clear"), Ok(Some(Command::Tester(Message::ClearAll))));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("states"), Ok(Some(Command::States)));
    }
}
