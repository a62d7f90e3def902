//! Terminal colors. Purely cosmetic: nothing branches on these strings.

use colored::{ColoredString, Colorize};

/// Branch names, database names and other identifiers.
pub fn ident(value: &str) -> ColoredString {
    value.cyan()
}

pub fn warning(value: &str) -> ColoredString {
    value.yellow()
}

pub fn error(value: &str) -> ColoredString {
    value.red()
}
