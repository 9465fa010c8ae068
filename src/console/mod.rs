//! Headless console front end.
//!
//! Stands in for the graphical master/detail views: it turns typed commands
//! into intents for the runtime and prints the resulting state as text.

mod command;
mod render;
mod session;

pub use command::{Command, CommandError, HELP};
pub use render::render;
pub use session::{Console, ConsoleError};
