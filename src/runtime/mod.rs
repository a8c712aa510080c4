use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::library::scan;

mod cli;
mod driver;
mod interrupt;
mod progress;
mod settings;

use cli::Cli;
use driver::process;
use progress::{Progress, summary_lines};

pub const EXIT_DESTINATION_EXISTS: u8 = 1;
pub const EXIT_INVALID_SOURCE: u8 = 2;
pub const EXIT_INTERRUPTED: u8 = 3;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sonosify=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let mut settings = settings::load_settings(cli.config.as_deref());
    cli.apply(&mut settings);

    if cli.destination.exists() {
        println!("[!] ERROR: Destination exists");
        return ExitCode::from(EXIT_DESTINATION_EXISTS);
    }
    if !cli.source.is_dir() {
        println!("[!] ERROR: Source is not a directory: {}", cli.source.display());
        return ExitCode::from(EXIT_INVALID_SOURCE);
    }

    let interrupt = interrupt::install().unwrap_or_else(|e| {
        warn!(error = %e, "could not install signal handlers");
        Arc::new(AtomicBool::new(false))
    });

    info!(
        source = %cli.source.display(),
        destination = %cli.destination.display(),
        extensions = ?settings.library.extensions,
        "starting run"
    );

    let progress = Progress::new(settings.output.progress);
    let report = process(
        scan(&cli.source, &settings.library),
        &cli.destination,
        &interrupt,
        &progress,
    );
    progress.finish();

    if report.interrupted {
        println!("[!] Interrupted");
        return ExitCode::from(EXIT_INTERRUPTED);
    }

    for line in summary_lines(&report.counters) {
        println!("{line}");
    }
    info!(counters = ?report.counters, "run finished");
    ExitCode::SUCCESS
}
