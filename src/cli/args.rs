use crate::constants::{verbosity, DEFAULT_BASE_DIR};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for pathstamp.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory tree whose files must carry a path header.
    #[arg(value_name = "BASE_DIR", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview rewrites without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn defaults_to_conventional_base_dir() {
        let args = Args::parse_from(["pathstamp"]);
        assert_eq!(args.base_dir, PathBuf::from("source"));
        assert_eq!(args.verbose, 0);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_explicit_base_dir_and_flags() {
        let args = Args::parse_from(["pathstamp", "engine/src", "-vv", "--dry-run"]);
        assert_eq!(args.base_dir, PathBuf::from("engine/src"));
        assert_eq!(args.verbose, 2);
        assert!(args.dry_run);
    }
}
