//! Command-line front end: argument parsing, help text, and the display
//! infrastructure shared with the I/O layer.

pub mod args;
pub mod constants;
pub mod help;

pub use args::{parse_args, parse_args_from, ParsedArgs};
