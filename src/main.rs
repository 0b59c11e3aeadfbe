//! Wordle Hint - CLI
//!
//! Renders the feedback for one guess: `wordle_hint apple G--YG`

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordle_hint::{
    commands::{RenderConfig, render_hint},
    output::{print_error, print_hint},
};

#[derive(Parser)]
#[command(
    name = "wordle_hint",
    about = "Render Wordle feedback for a guess as letters and emoji squares",
    version,
    author
)]
struct Cli {
    /// The guessed 5-letter word
    word: String,

    /// Feedback per letter: G/🟩 correct, Y/🟨 present, -/⬜ absent (W/*/L and O/~/X also accepted)
    #[arg(allow_hyphen_values = true)]
    pattern: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the hint
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = RenderConfig::new(cli.word, cli.pattern);
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "render failed");
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RenderConfig) -> Result<()> {
    let hint = render_hint(config)
        .with_context(|| format!("cannot render hint for '{}'", config.word.trim()))?;

    print_hint(&hint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_accepts_leading_absent() {
        let cli = Cli::try_parse_from(["wordle_hint", "crane", "-----"]).unwrap();
        assert_eq!(cli.word, "crane");
        assert_eq!(cli.pattern, "-----");

        let cli = Cli::try_parse_from(["wordle_hint", "crane", "-Y--G"]).unwrap();
        assert_eq!(cli.pattern, "-Y--G");
    }

    #[test]
    fn cli_pattern_renders() {
        let cli = Cli::try_parse_from(["wordle_hint", "crane", "-----"]).unwrap();
        let hint = render_hint(&RenderConfig::new(cli.word, cli.pattern)).unwrap();
        assert_eq!(hint.glyphs_line(), "⬜ ⬜ ⬜ ⬜ ⬜");
    }

    #[test]
    fn cli_requires_both_arguments() {
        assert!(Cli::try_parse_from(["wordle_hint", "crane"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
