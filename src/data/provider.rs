use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{COINGECKO, DF},
    data::{
        CategoryClassifier, NetworkError,
        wire::{CoinDetailResponse, MarketEntry},
    },
    domain::{Asset, AssetDetail},
};

/// Which rows the markets endpoint should return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarketSelection<'a> {
    /// Fixed first page, ordered by market cap.
    TopByMarketCap,
    /// Exactly these ids (remote search resolution).
    Ids(&'a [String]),
}

/// Abstract interface for the upstream market data API.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_markets(
        &self,
        selection: MarketSelection<'_>,
    ) -> Result<Vec<MarketEntry>, NetworkError>;

    async fn fetch_coin(&self, id: &str) -> Result<CoinDetailResponse, NetworkError>;

    /// Candidate coin ids for a free-text query, best match first.
    async fn search_ids(&self, query: &str) -> Result<Vec<String>, NetworkError>;
}

/// The fetcher: upstream calls plus local categorization. Cheap to clone into tasks.
#[derive(Clone)]
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
    classifier: Arc<CategoryClassifier>,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, classifier: Arc<CategoryClassifier>) -> Self {
        Self {
            provider,
            classifier,
        }
    }

    fn categorize(&self, entries: Vec<MarketEntry>) -> Vec<Asset> {
        entries
            .into_iter()
            .map(|entry| entry.into_asset(&self.classifier))
            .collect()
    }

    /// Top-N listing by market cap, each asset tagged with its category.
    pub async fn fetch_market_list(&self) -> Result<Vec<Asset>, NetworkError> {
        let result = self
            .provider
            .fetch_markets(MarketSelection::TopByMarketCap)
            .await;
        match result {
            Ok(entries) => {
                if DF.log_requests {
                    log::info!("Market list fetched: {} assets", entries.len());
                }
                Ok(self.categorize(entries))
            }
            Err(err) => {
                log::error!("Error fetching market list: {}", err);
                Err(err)
            }
        }
    }

    /// Extended data for one asset. Errors go back to the caller untouched.
    pub async fn fetch_asset_detail(&self, id: &str) -> Result<AssetDetail, NetworkError> {
        if DF.log_requests {
            log::info!("Fetching detail for {}", id);
        }
        let raw = self.provider.fetch_coin(id).await.inspect_err(|err| {
            log::error!("Error fetching details for coin {}: {}", id, err);
        })?;
        AssetDetail::try_from(raw)
    }

    /// Upstream search: at most `search_result_limit` candidates, resolved
    /// through the markets endpoint in one request.
    pub async fn search_assets(&self, query: &str) -> Result<Vec<Asset>, NetworkError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids = self.provider.search_ids(query).await.inspect_err(|err| {
            log::error!("Error searching for '{}': {}", query, err);
        })?;
        ids.truncate(COINGECKO.markets.search_result_limit);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self
            .provider
            .fetch_markets(MarketSelection::Ids(&ids))
            .await?;
        if DF.log_requests {
            log::info!(
                "Search '{}' resolved {} of {} candidates",
                query,
                entries.len(),
                ids.len()
            );
        }
        Ok(self.categorize(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::wire::fixtures, domain::Category};
    use std::{collections::HashMap, sync::Mutex};

    /// Canned provider that records the calls it received.
    #[derive(Default)]
    struct StubProvider {
        markets: Option<Result<Vec<MarketEntry>, NetworkError>>,
        search: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn with_markets(markets: Result<Vec<MarketEntry>, NetworkError>) -> Self {
            Self {
                markets: Some(markets),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        async fn fetch_markets(
            &self,
            selection: MarketSelection<'_>,
        ) -> Result<Vec<MarketEntry>, NetworkError> {
            let call = match selection {
                MarketSelection::TopByMarketCap => "markets:top".to_string(),
                MarketSelection::Ids(ids) => format!("markets:{}", ids.join(",")),
            };
            self.calls.lock().unwrap().push(call);
            self.markets.clone().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn fetch_coin(&self, id: &str) -> Result<CoinDetailResponse, NetworkError> {
            self.calls.lock().unwrap().push(format!("coin:{}", id));
            if id == "bitcoin" {
                Ok(serde_json::from_str(fixtures::DETAIL).unwrap())
            } else {
                Err(NetworkError::Status {
                    status: 404,
                    body: "coin not found".to_string(),
                })
            }
        }

        async fn search_ids(&self, query: &str) -> Result<Vec<String>, NetworkError> {
            self.calls.lock().unwrap().push(format!("search:{}", query));
            Ok(self.search.clone())
        }
    }

    fn service(provider: Arc<StubProvider>) -> MarketDataService {
        let classifier = CategoryClassifier::new(HashMap::from([(
            "bitcoin".to_string(),
            Category::StoreOfValue,
        )]));
        MarketDataService::new(provider, Arc::new(classifier))
    }

    #[tokio::test]
    async fn test_market_list_is_categorized() {
        let entries = serde_json::from_str(fixtures::MARKETS).unwrap();
        let provider = Arc::new(StubProvider::with_markets(Ok(entries)));
        let assets = service(provider.clone()).fetch_market_list().await.unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].category, Category::StoreOfValue);
        assert_eq!(assets[1].category, Category::Other);
        assert_eq!(provider.calls(), ["markets:top"]);
    }

    #[tokio::test]
    async fn test_market_list_error_propagates() {
        let provider = Arc::new(StubProvider::with_markets(Err(NetworkError::Transport(
            "connection refused".to_string(),
        ))));
        let err = service(provider).fetch_market_list().await.unwrap_err();
        assert!(matches!(err, NetworkError::Transport(_)));
    }

    #[tokio::test]
    async fn test_detail_success_and_failure() {
        let provider = Arc::new(StubProvider::default());
        let svc = service(provider.clone());

        let detail = svc.fetch_asset_detail("bitcoin").await.unwrap();
        assert_eq!(detail.name, "Bitcoin");

        let err = svc.fetch_asset_detail("nope").await.unwrap_err();
        assert_eq!(
            err,
            NetworkError::Status {
                status: 404,
                body: "coin not found".to_string()
            }
        );
        assert_eq!(provider.calls(), ["coin:bitcoin", "coin:nope"]);
    }

    #[tokio::test]
    async fn test_search_caps_candidates_at_ten() {
        let provider = Arc::new(StubProvider {
            search: (0..15).map(|i| format!("coin-{}", i)).collect(),
            ..Default::default()
        });
        service(provider.clone()).search_assets(" eth ").await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls[0], "search:eth");
        let resolved = calls[1].trim_start_matches("markets:").split(',').count();
        assert_eq!(resolved, 10);
        assert!(calls[1].ends_with("coin-9"));
    }

    #[tokio::test]
    async fn test_search_without_candidates_skips_markets_call() {
        let provider = Arc::new(StubProvider::default());
        let svc = service(provider.clone());

        assert!(svc.search_assets("zzzz").await.unwrap().is_empty());
        assert!(svc.search_assets("   ").await.unwrap().is_empty());
        assert_eq!(provider.calls(), ["search:zzzz"]);
    }
}
