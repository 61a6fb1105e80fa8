//! Configuration module for the tracker.

mod categories;
mod coingecko;
mod debug;

// Public
pub mod constants;

// Re-export commonly used items
pub use categories::{BUNDLED_CATEGORY_TABLE, CategoryTable};
pub use constants::{CATEGORY_SECTION_SIZE, SEARCH_DEBOUNCE};
pub use coingecko::{COINGECKO, CoinGeckoConfig, MarketQuery};
pub use debug::{DF, LogFlags};
