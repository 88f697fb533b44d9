//! Command parsing and name resolution.

mod command;
mod resolver;

pub use command::{Command, VERBS, normalize_direction, parse_command};
pub use resolver::{FUZZY_THRESHOLD, Named, resolve, suggest};
