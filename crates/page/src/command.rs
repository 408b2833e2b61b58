//! Line commands accepted by the terminal page.
//!
//! Each line of input is one user action: typing into a field, pressing
//! one of the two buttons, or asking for the page to be redrawn.

use filmreel_core::draft::DraftField;

/// Help text printed for `help` and for unrecognised input.
pub const HELP_TEXT: &str = "\
Commands:
  set <field> <value>   type into a field (title, openingText, releaseDate)
  add                   Add Movie
  fetch                 Fetch Movies
  show                  redraw the page
  help                  show this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a field with the given value, which may be empty.
    Set { field: DraftField, value: String },
    Add,
    Fetch,
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Usage: set <field> <value>")]
    MissingField,

    #[error("{0}")]
    InvalidField(String),
}

/// Parse one input line.
///
/// For `set`, everything after the field name (minus the single
/// separating space) is the value, so values keep inner whitespace.
/// A literal `\n` in the value becomes a newline, which is how the
/// multi-line opening text is typed on one line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "" => Err(CommandError::Empty),
        "set" => {
            let rest = rest.trim_start();
            let (name, value) = match rest.split_once(' ') {
                Some((name, value)) => (name, value),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(CommandError::MissingField);
            }
            let field = DraftField::from_str(name)
                .map_err(|e| CommandError::InvalidField(e.to_string()))?;
            Ok(Command::Set {
                field,
                value: value.replace("\\n", "\n"),
            })
        }
        "add" => Ok(Command::Add),
        "fetch" => Ok(Command::Fetch),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
