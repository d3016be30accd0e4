//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "autodeck",
    version,
    about = "Automated two-player deck-building match simulator"
)]
pub struct AutodeckCli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one match and print every event
    Play {
        /// RNG seed; random when neither flag nor config provide one
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Append the finished match record (JSONL) to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Play many matches and summarize the results
    Sim {
        #[arg(long)]
        matches: Option<u32>,
        /// Base seed; match i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Write one match record per line (JSONL) to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_flags() {
        let cli = AutodeckCli::try_parse_from([
            "autodeck", "play", "--seed", "9", "--format", "json",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                seed,
                format,
                output,
            } => {
                assert_eq!(seed, Some(9));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(output.is_none());
            }
            other => panic!("expected play, got {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_is_global() {
        let cli = AutodeckCli::try_parse_from(["autodeck", "sim", "--matches", "3", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.cmd, Commands::Sim { matches: Some(3), .. }));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(AutodeckCli::try_parse_from(["autodeck", "play", "--format", "xml"]).is_err());
    }

    #[test]
    fn all_subcommands_parse() {
        for args in [
            vec!["autodeck", "play"],
            vec!["autodeck", "sim"],
            vec!["autodeck", "cfg"],
        ] {
            assert!(AutodeckCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }
}
