use std::str::FromStr;

use thiserror::Error;

use crate::ui::catalog::{ListTag, ParseListTagError};

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a list in the sidebar, or `None` to clear the selection.
    Focus(Option<ListTag>),
    List,
    /// Open the detail pane for a 1-based row, or close it.
    Show(Option<usize>),
    Delete(usize),
    New,
    Name(String),
    Save,
    Cancel,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid row '{0}' (rows start at 1)")]
    InvalidRow(String),
    #[error(transparent)]
    List(#[from] ParseListTagError),
}

pub const HELP: &str = "\
commands:
  focus a|b|c|none   select a list
  list               print the current view
  show <row>|none    open or close the detail pane
  delete <row>       delete a recipe from the store
  new                open the new recipe sheet
  name <text>        edit the sheet's name field
  save               save the sheet and close it
  cancel             close the sheet without saving
  help               show this text
  quit               exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "focus" => match rest {
                "" => Err(CommandError::MissingArgument {
                    command: "focus",
                    expected: "a, b, c or none",
                }),
                "none" => Ok(Command::Focus(None)),
                key => Ok(Command::Focus(Some(key.parse()?))),
            },
            "list" | "ls" => Ok(Command::List),
            "show" => match rest {
                "" => Err(CommandError::MissingArgument {
                    command: "show",
                    expected: "a row number or none",
                }),
                "none" => Ok(Command::Show(None)),
                row => parse_row(row).map(|row| Command::Show(Some(row))),
            },
            "delete" | "rm" => match rest {
                "" => Err(CommandError::MissingArgument {
                    command: "delete",
                    expected: "a row number",
                }),
                row => parse_row(row).map(Command::Delete),
            },
            "new" => Ok(Command::New),
            "name" => Ok(Command::Name(rest.to_string())),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(CommandError::InvalidRow(raw.to_string())),
    }
}
