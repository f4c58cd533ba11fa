//! mbcli - per-application volume control from the command line
//!
//! Subcommands:
//! - `mbcli list` - list active audio sessions and their volumes
//! - `mbcli select` - pick a session by position and set its volume
//! - `mbcli set <app_name> <volume>` - set an application's volume
//! - `mbcli toggle <app_name>` - toggle an application's mute state
//! - `mbcli cdda` - toggle the Cataclysm: DDA process

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mixboard::{backend, VolumeResult};

/// Preset process name behind the `cdda` convenience command.
const CDDA_PROCESS: &str = "cataclysm-tiles.exe";

#[derive(Parser)]
#[command(name = "mbcli")]
#[command(about = "Control per-application output volumes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all active audio sessions
    List,

    /// Interactively select a session and change its volume
    Select,

    /// Set volume for an application
    Set {
        /// Process name to match, e.g. "firefox.exe"
        app_name: String,

        /// Volume as a percentage ("50") or a fraction ("0.5")
        volume: String,
    },

    /// Toggle mute for an application
    Toggle {
        /// Process name to match
        app_name: String,
    },

    /// Toggle CDDA's volume on and off
    Cdda,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let provider = backend::default_provider()?;

    match cli.command {
        Commands::List => {
            for (line, _) in mixboard::list_sessions_verbose(&provider, false)? {
                println!("{line}");
            }
        }
        Commands::Select => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let results =
                mixboard::interactive_set_volume(&provider, &mut stdin.lock(), &mut stdout)?;
            print_set_results(&results);
        }
        Commands::Set { app_name, volume } => {
            let results =
                mixboard::set_volume_by_name(&provider, &app_name, volume.as_str(), true)?;
            print_set_results(&results);
        }
        Commands::Toggle { app_name } => {
            let results = mixboard::toggle_volume(&provider, &app_name)?;
            print_toggle_results(&results, None);
        }
        Commands::Cdda => {
            let results = mixboard::toggle_volume(&provider, CDDA_PROCESS)?;
            print_toggle_results(&results, Some("CDDA"));
        }
    }

    Ok(())
}

fn print_set_results(results: &[VolumeResult]) {
    for result in results {
        if let Some(error) = result.error {
            println!("{error}");
        } else if let (Some(volume), Some(name)) = (result.volume, result.name.as_deref()) {
            println!("Volume of {} set to {:.0}%.", name, volume * 100.0);
        }
    }
}

fn print_toggle_results(results: &[VolumeResult], label: Option<&str>) {
    for result in results {
        if let Some(error) = result.error {
            println!("{error}");
        } else if let (Some(muted), Some(name)) = (result.muted, result.name.as_deref()) {
            let name = label.unwrap_or(name);
            let state = if muted { "muted" } else { "unmuted" };
            println!("{name} is now {state}.");
        }
    }
}
