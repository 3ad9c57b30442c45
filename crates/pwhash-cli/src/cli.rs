use clap::{Parser, ValueEnum};

use pwhash_core::VERSION;

/// pwhash - Encode a password as a Halo-compatible Argon2id hash
///
/// Reads one line from standard input and prints the encoded hash.
#[derive(Parser)]
#[command(name = "pwhash")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Log verbosity (written to stderr)
    #[arg(short, long, value_enum, env = "PWHASH_LOG", default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Log levels accepted by `--log-level`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_log_level_is_warn() {
        let cli = Cli::try_parse_from(["pwhash"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["pwhash", "--log-level", "debug"]).unwrap();
        assert_eq!(log::LevelFilter::from(cli.log_level), log::LevelFilter::Debug);
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["pwhash", "hunter2"]).is_err());
    }
}
