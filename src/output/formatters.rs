//! Formatting utilities for terminal output

use colored::Colorize;
use std::fmt::Display;

/// Format an error as a single `error: ...` line with a red label
#[must_use]
pub fn format_error(err: &dyn Display) -> String {
    format!("{} {err}", "error:".red().bold())
}
