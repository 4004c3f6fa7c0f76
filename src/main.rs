// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use filecat::cli::{Cli, Commands, ProfileCommand};
use filecat::config::ConfigBuilder;
use filecat::errors::Error;
use filecat::output::summary::write_report;
#[cfg(feature = "progress")]
use filecat::progress::IndicatifProgress;
use filecat::progress::ProgressReporter;
use filecat::run;
use filecat::settings::{
    current_profile, delete_profile, ensure_default_profile, list_profiles, load_profile,
    rename_profile, save_profile, JsonFileStore, Profile,
};
use filecat::signal::setup_signal_handler;
use std::sync::Arc;

// Wrapper struct to handle subcommands without breaking the library's Cli struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct AppArgs {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    cli: Cli,
}

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let directive = if cfg!(debug_assertions) {
        "filecat=debug"
    } else {
        "filecat=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().context("invalid log directive")?),
        )
        .init();

    log::info!("Starting filecat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let args = AppArgs::parse();

    let settings_path = args.cli.settings.clone();

    // --- Handle Subcommands (Profile management) ---
    if let Some(Commands::Profile { action }) = &args.command {
        let mut store = open_store(settings_path.as_deref())?;
        return manage_profiles(&mut store, action);
    }

    // --- Configuration & Execution ---
    let quiet = args.cli.quiet;
    let save_as = args.cli.save_profile.clone();
    let base_profile = match args.cli.profile.as_deref() {
        Some(name) => Some(load_profile(&open_store(settings_path.as_deref())?, name)?),
        None => None,
    };
    let config = ConfigBuilder::from_cli(args.cli, base_profile.as_ref()).build()?;
    log::debug!("Configuration built successfully.");

    if let Some(name) = save_as {
        let mut store = open_store(settings_path.as_deref())?;
        save_profile(&mut store, &name, &Profile::from_config(&config))?;
        store.save()?;
        log::info!("Saved profile '{}'", name);
    }

    // Decide whether to show a progress bar. Show it if stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if !quiet && atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    let token = setup_signal_handler()?;

    // --- Error Handling ---
    match run(&config, &token, progress_reporter) {
        Ok(result) => {
            if !quiet && !config.dry_run {
                write_report(&mut std::io::stderr(), &result, &config.output_destination)?;
            }
            Ok(())
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(Error::NoFilesFound) => {
            eprintln!("filecat: No files found matching the specified criteria.");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Opens the settings file given with `--settings`, or the default one.
fn open_store(path: Option<&str>) -> Result<JsonFileStore> {
    let store = match path {
        Some(path) => JsonFileStore::open(path)?,
        None => JsonFileStore::open_default()?,
    };
    log::debug!("Using settings file {:?}", store.path());
    Ok(store)
}

fn manage_profiles(store: &mut JsonFileStore, action: &ProfileCommand) -> Result<()> {
    match action {
        ProfileCommand::List => {
            if ensure_default_profile(store)? {
                store.save()?;
            }
            let current = current_profile(store);
            for name in list_profiles(store) {
                let marker = if current.as_deref() == Some(name.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, name);
            }
        }
        ProfileCommand::Show { name } => {
            let profile = load_profile(store, name)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileCommand::Delete { name } => {
            delete_profile(store, name)?;
            store.save()?;
            eprintln!("Deleted profile '{}'.", name);
        }
        ProfileCommand::Rename { old, new } => {
            rename_profile(store, old, new)?;
            store.save()?;
            eprintln!("Renamed profile '{}' to '{}'.", old, new);
        }
    }
    Ok(())
}
