#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;

use {
    clap::Parser,
    config::{
        COINGECKO,
        constants::{SEARCH_DEBOUNCE, SEARCH_DEBOUNCE_MAX_MS, SEARCH_DEBOUNCE_MIN_MS},
    },
    std::{path::PathBuf, time::Duration},
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the CoinGecko-compatible API
    #[arg(long, env = "CRYPTO_TRACKER_API_BASE_URL", default_value = COINGECKO.endpoints.base_url)]
    pub api_base_url: String,

    /// JSON category table replacing the bundled one
    #[arg(long)]
    pub categories: Option<PathBuf>,

    /// Search debounce window in milliseconds (clamped to 50..=1000)
    #[arg(long, default_value_t = SEARCH_DEBOUNCE.as_millis() as u64)]
    pub debounce_ms: u64,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            api_base_url: COINGECKO.endpoints.base_url.to_string(),
            categories: None,
            debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl Cli {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(
            self.debounce_ms
                .clamp(SEARCH_DEBOUNCE_MIN_MS, SEARCH_DEBOUNCE_MAX_MS),
        )
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
