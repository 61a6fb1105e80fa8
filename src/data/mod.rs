mod classifier;
mod coingecko;
mod error;
mod provider;
mod tasks;
pub mod wire;

pub use {
    classifier::CategoryClassifier,
    coingecko::CoinGeckoProvider,
    error::NetworkError,
    provider::{MarketDataProvider, MarketDataService, MarketSelection},
    tasks::TaskRunner,
};
