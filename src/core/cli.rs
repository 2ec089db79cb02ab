//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use super::settings_persistence::default_settings_path;

/// Two-player chess at one keyboard
#[derive(Parser, Debug, Clone)]
#[command(name = "duelchess", version, about)]
pub struct Cli {
    /// Settings file to use instead of the per-user one
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file and continue
    #[arg(long)]
    pub write_settings: bool,

    /// Log filter in tracing's env-filter syntax
    #[arg(long, value_name = "FILTER", default_value = "info,wgpu=error,naga=warn")]
    pub log_filter: String,
}

impl Cli {
    /// Settings path from the command line or the default location
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(default_settings_path)
    }
}
