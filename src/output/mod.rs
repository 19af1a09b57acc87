//! Output formatting for the CLI shell.

pub mod json;
pub mod terminal;
