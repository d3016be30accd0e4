//! # autodeck CLI Library
//!
//! Command-line front end for the automated deck-building match engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. `main.rs` only forwards to it.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["autodeck", "play", "--seed", "42"];
//! let code = autodeck_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one match and print its events as text or JSON
//! - `sim`: Play many matches and print win counts and average length
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{AutodeckCli, Commands};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = autodeck_cli::run(["autodeck", "play", "--seed", "7"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("GAME OVER"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match AutodeckCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = print_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            seed,
            format,
            output,
        } => handle_play_command(seed, format, output, out),
        Commands::Sim {
            matches,
            seed,
            output,
        } => handle_sim_command(matches, seed, output, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn print_usage(err: &mut dyn Write, clap_msg: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_msg)?;
    writeln!(err)?;
    writeln!(err, "autodeck: automated deck-building matches")?;
    writeln!(err, "Usage: autodeck <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: autodeck --help")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["autodeck", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("play") && s.contains("sim") && s.contains("cfg"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_prints_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["autodeck", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let s = String::from_utf8(err).unwrap();
        assert!(s.contains("Usage: autodeck <command> [options]"));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_matches_is_an_input_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["autodeck", "sim", "--matches", "0"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let s = String::from_utf8(err).unwrap();
        assert_eq!(s, "Error: Invalid input: matches must be >= 1\n");
    }
}
