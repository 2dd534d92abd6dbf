//! Command-line interface for parlo
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

/// Voice translation from the command line
#[derive(Parser, Debug)]
#[command(
    name = "parlo",
    version = crate::version_string(),
    about = "Voice translation from the command line",
    subcommand_negates_reqs = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: service diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Language to translate into (code or name). Examples: es, Japanese
    #[arg(long, value_name = "LANG", required = true)]
    pub to: Option<String>,

    /// Spoken language (default: auto-detect). Examples: en, German
    #[arg(long, value_name = "LANG")]
    pub from: Option<String>,

    /// Recording duration (default: 10s). Examples: 5s, 30s, 1m
    #[arg(long, short = 'd', value_name = "DURATION", value_parser = parse_duration_arg)]
    pub duration: Option<Duration>,

    /// Audio input device name substring (e.g., USB)
    #[arg(long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Write results to an HTML page with an embedded audio player
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Skip playing the synthesized speech
    #[arg(long)]
    pub no_play: bool,
}

/// Parse a recording duration string.
///
/// Supports any duration format accepted by `humantime`: bare numbers (seconds),
/// single-unit (`30s`, `5m`), and compound (`1m30s`).
fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(s).map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported languages
    Languages,

    /// List available audio input devices
    Devices,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_target() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.to.as_deref(), Some("es"));
        assert!(cli.from.is_none());
        assert!(cli.duration.is_none());
        assert!(cli.device.is_none());
        assert!(cli.html.is_none());
        assert!(!cli.no_play);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let result = Cli::try_parse_from(["parlo"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_source_and_target() {
        let cli = Cli::try_parse_from(["parlo", "--from", "en", "--to", "ja"]).unwrap();
        assert_eq!(cli.from.as_deref(), Some("en"));
        assert_eq!(cli.to.as_deref(), Some("ja"));
    }

    #[test]
    fn test_parse_target_by_name() {
        let cli = Cli::try_parse_from(["parlo", "--to", "Japanese"]).unwrap();
        assert_eq!(cli.to.as_deref(), Some("Japanese"));
    }

    #[test]
    fn test_parse_verbose_single() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_verbose_repeated_flags() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "-v", "-v"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_quiet_short_flag() {
        let cli = Cli::try_parse_from(["parlo", "-q", "--to", "es"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_duration_long() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "--duration", "5s"]).unwrap();
        assert_eq!(cli.duration, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_parse_duration_short_bare_number() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "-d", "30"]).unwrap();
        assert_eq!(cli.duration, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_parse_device() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "--device", "USB"]).unwrap();
        assert_eq!(cli.device.as_deref(), Some("USB"));
    }

    #[test]
    fn test_parse_html_output() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "--html", "out.html"]).unwrap();
        assert_eq!(cli.html, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn test_parse_no_play() {
        let cli = Cli::try_parse_from(["parlo", "--to", "es", "--no-play"]).unwrap();
        assert!(cli.no_play);
    }

    #[test]
    fn test_parse_global_config() {
        let cli =
            Cli::try_parse_from(["parlo", "--to", "es", "--config", "/path/to/config.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_languages_without_target() {
        // Subcommands do not require --to
        let cli = Cli::try_parse_from(["parlo", "languages"]).unwrap();
        match cli.command {
            Some(Commands::Languages) => {}
            _ => panic!("Expected Languages command"),
        }
        assert!(cli.to.is_none());
    }

    #[test]
    fn test_parse_devices() {
        let cli = Cli::try_parse_from(["parlo", "devices"]).unwrap();
        match cli.command {
            Some(Commands::Devices) => {}
            _ => panic!("Expected Devices command"),
        }
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["parlo", "completions", "bash"]).unwrap();
        match cli.command {
            Some(Commands::Completions { shell }) => {
                assert_eq!(shell, Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_completions_requires_shell() {
        let result = Cli::try_parse_from(["parlo", "completions"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_global_options_after_command() {
        // Global options should work before or after the command
        let cli = Cli::try_parse_from(["parlo", "devices", "--config", "/tmp/config.toml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
    }

    #[test]
    fn test_invalid_command_returns_error() {
        let result = Cli::try_parse_from(["parlo", "invalid"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_help_flag() {
        // Clap returns an error for --help but with DisplayHelp kind
        let result = Cli::try_parse_from(["parlo", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        // Clap returns an error for --version but with DisplayVersion kind
        let result = Cli::try_parse_from(["parlo", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    // ── Duration parsing tests ───────────────────────────────────────────

    #[test]
    fn test_parse_duration_arg_bare_number() {
        assert_eq!(parse_duration_arg("10").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration_arg("0").unwrap(), Duration::from_secs(0));
        assert_eq!(parse_duration_arg("300").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn test_parse_duration_arg_with_s_suffix() {
        assert_eq!(parse_duration_arg("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration_arg("20s").unwrap(), Duration::from_secs(20));
    }

    #[test]
    fn test_parse_duration_arg_with_m_suffix() {
        assert_eq!(parse_duration_arg("1m").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_duration_arg("5m").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn test_parse_duration_arg_compound() {
        assert_eq!(
            parse_duration_arg("1m30s").unwrap(),
            Duration::from_secs(90)
        );
        assert_eq!(
            parse_duration_arg("2m30s").unwrap(),
            Duration::from_secs(150)
        );
    }

    #[test]
    fn test_parse_duration_arg_verbose_units() {
        assert_eq!(
            parse_duration_arg("5minutes").unwrap(),
            Duration::from_secs(300)
        );
        assert_eq!(
            parse_duration_arg("30seconds").unwrap(),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_parse_duration_arg_invalid() {
        assert!(parse_duration_arg("abc").is_err());
        assert!(parse_duration_arg("10x").is_err());
        assert!(parse_duration_arg("").is_err());
        assert!(parse_duration_arg("-5").is_err());
    }
}
