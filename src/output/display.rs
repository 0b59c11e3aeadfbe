//! Display functions for command results

use super::formatters::format_error;
use crate::core::HintRecord;
use std::fmt::Display;

/// Print a hint as two lines: uppercased letters, then feedback squares
pub fn print_hint(hint: &HintRecord) {
    hint.visualize();
}

/// Print an error to stderr
pub fn print_error(err: &dyn Display) {
    eprintln!("{}", format_error(err));
}
