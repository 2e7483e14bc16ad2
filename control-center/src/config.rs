//! Command line and start-up configuration

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::app::{AppOptions, Page};
use crate::catalog::Catalog;

/// Log file inside the data directory
pub const LOG_FILE: &str = "control-center.log";

#[derive(Parser, Debug, Clone)]
#[command(name = "control-center")]
#[command(about = "Terminal control center for an automated media production squad", long_about = None)]
#[command(version)]
pub struct Args {
    /// Directory for preferences and the log file
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// JSON catalog replacing the built-in agents, workflows and metrics
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Page shown at start-up
    #[arg(long, default_value = "home")]
    pub page: Page,

    /// Use the ASCII icon set
    #[arg(long)]
    pub ascii: bool,

    /// Disable transitions
    #[arg(long)]
    pub no_animations: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// `--data-dir`, else the platform data directory, else `./.control-center`
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        match ProjectDirs::from("com", "control-center", "control-center") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => PathBuf::from(".control-center"),
        }
    }

    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            start_page: self.page,
            animations: !self.no_animations,
            ascii_icons: self.ascii,
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::seeded()),
        }
    }

    /// Like [`Args::load_catalog`], but an unreadable catalog file falls
    /// back to the built-in content and hands the error back for display
    pub fn load_catalog_or_seeded(&self) -> (Catalog, Option<anyhow::Error>) {
        match self.load_catalog() {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "falling back to built-in catalog");
                (Catalog::seeded(), Some(e))
            }
        }
    }
}

/// Send tracing output to `<data dir>/control-center.log`
///
/// The terminal belongs to the UI, so nothing is written to stderr.
/// `RUST_LOG` overrides `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("control_center={}", level.to_lowercase())))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
