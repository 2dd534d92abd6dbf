use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use parlo::app::run_translate_command;
use parlo::audio::list_devices;
use parlo::cli::{Cli, Commands};
use parlo::config::Config;
use parlo::languages;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;
            // Required by clap when no subcommand is given
            let to = cli.to.unwrap_or_default();
            run_translate_command(
                config,
                cli.from,
                to,
                cli.duration,
                cli.device,
                cli.html,
                cli.no_play,
                cli.quiet,
                cli.verbose,
            )
            .await?;
        }
        Some(Commands::Languages) => {
            list_languages();
        }
        Some(Commands::Devices) => {
            list_audio_devices()?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "parlo", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/parlo/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        // Load from custom path
        Config::load(path)?
    } else {
        // Try default path, fall back to defaults
        let default_path = Config::default_path();
        Config::load_or_default(&default_path)?
    };

    // Apply environment variable overrides
    Ok(config.with_env_overrides())
}

/// List the supported languages.
fn list_languages() {
    println!("Supported languages:");
    for language in languages::all() {
        println!(
            "  {}  {}",
            format!("{:<5}", language.code).green(),
            language.name
        );
    }
}

/// List available audio input devices.
fn list_audio_devices() -> Result<()> {
    let devices = list_devices()?;

    if devices.is_empty() {
        eprintln!("No audio input devices found");
        std::process::exit(1);
    }

    println!("Available audio input devices:");
    for (idx, device) in devices.iter().enumerate() {
        println!("  [{}] {}", idx, device);
    }

    Ok(())
}
