//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Answers ten fixed demographic questions about a census CSV extract.
///
/// Examples:
///   demographic-analyzer adult.data.csv
///   demographic-analyzer --no-print --json data/adult.data.csv
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Census CSV file with a header row
    #[arg(
        value_name = "FILE",
        default_value = "adult.data.csv",
        env = "DEMOGRAPHIC_DATA"
    )]
    pub data: PathBuf,

    /// Skip the human-readable summary
    #[arg(long)]
    pub no_print: bool,

    /// Write the results to stdout as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn print_data(&self) -> bool {
        !self.no_print
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["demographic-analyzer"]).unwrap();
        assert!(args.print_data());
        assert!(!args.json);
        assert_eq!(args.log_level(), Level::WARN);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "demographic-analyzer",
            "--no-print",
            "--json",
            "-v",
            "census.csv",
        ])
        .unwrap();
        assert!(!args.print_data());
        assert!(args.json);
        assert_eq!(args.data, PathBuf::from("census.csv"));
        assert_eq!(args.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["demographic-analyzer", "-v", "-q"]).is_err());
    }
}
