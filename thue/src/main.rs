//! Thue interpreter CLI.
//!
//! Loads a source file, runs the rewriting engine over process stdio, and
//! optionally prints the final state. Selection defaults to random; `--left`
//! and `--right` are mutually exclusive and pick by rule table position.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use thue::config::RunConfig;
use thue::core::selector::SelectionMode;
use thue::exit_codes;
use thue::io::source::load_program;
use thue::io::streams::std_streams;
use thue::logging;
use thue::looping::{RunResult, run_program};

#[derive(Parser)]
#[command(
    name = "thue",
    version,
    about = "Interpreter for the Thue string-rewriting language"
)]
struct Cli {
    /// Location of Thue source code.
    source: PathBuf,

    /// Show each applied rule and state transition.
    #[arg(short, long)]
    verbose: bool,

    /// Execute the first matching rule from the top of the table.
    #[arg(short, long, conflicts_with = "right")]
    left: bool,

    /// Execute the last matching rule from the bottom of the table.
    #[arg(short, long)]
    right: bool,

    /// Maximum number of rewrite steps before forced termination.
    #[arg(short = 'M', long)]
    max_iterations: Option<u32>,

    /// Print the last state before finishing.
    #[arg(short, long)]
    endstate: bool,

    /// Add a line break after each output directive.
    #[arg(short = 'n', long)]
    newline: bool,
}

impl Cli {
    fn selection(&self) -> SelectionMode {
        if self.left {
            SelectionMode::Leftmost
        } else if self.right {
            SelectionMode::Rightmost
        } else {
            SelectionMode::Random
        }
    }

    fn run_config(&self) -> RunConfig {
        RunConfig {
            selection: self.selection(),
            max_iterations: self.max_iterations,
            trace: self.verbose,
            trailing_newline: self.newline,
        }
    }
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let program = load_program(&cli.source)?;
    let config = cli.run_config();
    let mut streams = std_streams();
    let mut rng = rand::thread_rng();
    let result = run_program(
        &program.rules,
        &program.initial_state,
        &config,
        &mut streams,
        &mut rng,
    )?;
    match result {
        RunResult::Completed(state) => {
            if cli.endstate {
                println!("{state}");
            }
            Ok(exit_codes::OK)
        }
        RunResult::IterationBoundExceeded(state) => {
            if cli.endstate {
                println!("Max iterations reached! Last program state was {state}");
            }
            Ok(exit_codes::BOUND_EXCEEDED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_random_selection() {
        let cli = Cli::parse_from(["thue", "program.t"]);
        assert_eq!(cli.selection(), SelectionMode::Random);
        assert!(!cli.verbose);
        assert_eq!(cli.max_iterations, None);
    }

    #[test]
    fn parse_left_and_right_map_to_selection_modes() {
        let cli = Cli::parse_from(["thue", "program.t", "--left"]);
        assert_eq!(cli.selection(), SelectionMode::Leftmost);
        let cli = Cli::parse_from(["thue", "program.t", "-r"]);
        assert_eq!(cli.selection(), SelectionMode::Rightmost);
    }

    #[test]
    fn left_and_right_conflict() {
        let parsed = Cli::try_parse_from(["thue", "program.t", "-l", "-r"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn parse_full_flag_set_into_config() {
        let cli = Cli::parse_from([
            "thue",
            "program.t",
            "-v",
            "-r",
            "-M",
            "100",
            "--endstate",
            "--newline",
        ]);
        let config = cli.run_config();
        assert_eq!(config.selection, SelectionMode::Rightmost);
        assert_eq!(config.max_iterations, Some(100));
        assert!(config.trace);
        assert!(config.trailing_newline);
        assert!(cli.endstate);
    }
}
