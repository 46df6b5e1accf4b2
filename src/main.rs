// src/main.rs

use anyhow::Result;
use clap::Parser;
use seqls::cli::Cli;
use seqls::config::ConfigBuilder;
use seqls::errors::Error;
use seqls::run;
use seqls::signal::setup_signal_handler;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG, when set, replaces the default level.
    let default_directive = if cfg!(debug_assertions) {
        "seqls=debug"
    } else {
        "seqls=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();

    log::debug!("Starting seqls v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!("seqls: internal error: {}", msg);
    }));

    // --- Configuration & Execution ---
    let cli = Cli::parse();
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    match run(&config, &token) {
        Ok(report) if report.has_failures() => {
            log::debug!("{} path(s) could not be listed", report.failures.len());
            std::process::exit(1);
        }
        Ok(_) => Ok(()),
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("seqls: {}", e);
            std::process::exit(1);
        }
    }
}
