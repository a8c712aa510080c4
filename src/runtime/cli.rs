use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use crate::config::Settings;
use crate::library::parse_filter;

/// Sonos Media Library Generator
#[derive(Debug, Parser)]
#[command(name = "sonosify", version, about)]
pub struct Cli {
    /// Music library source directory
    pub source: PathBuf,

    /// Destination directory (must not exist yet)
    pub destination: PathBuf,

    /// Comma-separated file extensions to process [default: m4a]
    #[arg(long)]
    pub filter: Option<String>,

    /// Hide the live progress line
    #[arg(long)]
    pub no_progress: bool,

    /// Config file to use instead of SONOSIFY_CONFIG_PATH / the XDG default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Apply flags on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(filter) = &self.filter {
            let extensions = parse_filter(filter);
            if extensions.is_empty() {
                warn!(filter = %filter, "empty --filter, keeping configured extensions");
            } else {
                settings.library.extensions = extensions;
            }
        }
        if self.no_progress {
            settings.output.progress = false;
        }
    }
}
