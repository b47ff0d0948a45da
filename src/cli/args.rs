//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command-line arguments
#[derive(Parser)]
#[command(name = "confusable-distance")]
#[command(about = "Edit distance between strings after collapsing confusable characters")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the confusable distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Maximum input length in characters
        #[arg(short = 'm', long, conflicts_with = "no_limit")]
        max_len: Option<usize>,

        /// Disable the input length limit
        #[arg(long)]
        no_limit: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the skeleton of each argument
    Skeleton {
        /// Strings to normalize
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// List every character confusable with the given one
    Class {
        /// A single character
        ch: char,
    },

    /// Compare tab-separated pairs from a file, one pair per line
    Batch {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Maximum input length in characters
        #[arg(short = 'm', long, conflicts_with = "no_limit")]
        max_len: Option<usize>,

        /// Disable the input length limit
        #[arg(long)]
        no_limit: bool,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Show the compiled confusable table's version and size
    Table,

    /// Show or update user settings
    Settings {
        /// Set default maximum input length
        #[arg(long, conflicts_with = "set_no_limit")]
        set_max_len: Option<usize>,

        /// Disable the length limit by default
        #[arg(long)]
        set_no_limit: bool,

        /// Default to JSON output
        #[arg(long, value_parser = parse_on_off)]
        set_json: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long, conflicts_with_all = ["set_max_len", "set_no_limit", "set_json"])]
        reset: bool,
    },
}

fn parse_on_off(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(format!("expected on/off, got {other:?}")),
    }
}

/// Length limit requested on the command line, if any.
///
/// `Some(None)` means the user asked for no limit.
pub fn limit_override(max_len: Option<usize>, no_limit: bool) -> Option<Option<usize>> {
    if no_limit {
        Some(None)
    } else {
        max_len.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance() {
        let cli = Cli::try_parse_from(["confusable-distance", "distance", "HELLO", "HELL0", "--json"])
            .unwrap();
        match cli.command {
            Commands::Distance { a, b, json, max_len, no_limit } => {
                assert_eq!(a, "HELLO");
                assert_eq!(b, "HELL0");
                assert!(json);
                assert_eq!(max_len, None);
                assert!(!no_limit);
            }
            _ => panic!("expected distance command"),
        }
    }

    #[test]
    fn test_limit_flags_conflict() {
        let res = Cli::try_parse_from([
            "confusable-distance",
            "distance",
            "a",
            "b",
            "--max-len",
            "3",
            "--no-limit",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_reset_conflicts_with_setters() {
        for flags in [
            &["--set-max-len", "8"][..],
            &["--set-no-limit"][..],
            &["--set-json", "on"][..],
        ] {
            let args = ["confusable-distance", "settings", "--reset"]
                .into_iter()
                .chain(flags.iter().copied());
            assert!(Cli::try_parse_from(args).is_err(), "--reset accepted with {flags:?}");
        }

        let cli = Cli::try_parse_from(["confusable-distance", "settings", "--reset"]).unwrap();
        assert!(matches!(cli.command, Commands::Settings { reset: true, .. }));
    }

    #[test]
    fn test_limit_override() {
        assert_eq!(limit_override(None, false), None);
        assert_eq!(limit_override(Some(8), false), Some(Some(8)));
        assert_eq!(limit_override(None, true), Some(None));
    }

    #[test]
    fn test_parse_on_off() {
        assert_eq!(parse_on_off("ON"), Ok(true));
        assert_eq!(parse_on_off("off"), Ok(false));
        assert!(parse_on_off("maybe").is_err());
    }
}
