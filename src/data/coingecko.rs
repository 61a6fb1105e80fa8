//! REST client for the CoinGecko public API.

use {
    async_trait::async_trait,
    reqwest::{Client, Url},
    serde::de::DeserializeOwned,
};

use crate::{
    config::{COINGECKO, DF, MarketQuery},
    data::{
        MarketDataProvider, MarketSelection, NetworkError,
        wire::{CoinDetailResponse, MarketEntry, SearchResponse},
    },
};

pub struct CoinGeckoProvider {
    client: Client,
    base_url: Url,
}

impl CoinGeckoProvider {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid upstream API base URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("upstream API base URL '{}' cannot carry a path", base_url);
        }

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .user_agent(COINGECKO.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, NetworkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NetworkError::Transport(format!("bad base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET + status check + JSON decode. Non-2xx bodies are kept for the error message.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, NetworkError> {
        if DF.log_requests {
            log::info!("GET {}", url);
        }
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Upstream returned {}: {}", status, body);
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Query parameters of the markets endpoint for a given selection.
pub(crate) fn market_params(
    query: &MarketQuery,
    selection: MarketSelection<'_>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("vs_currency", query.vs_currency.to_string()),
        ("order", query.order.to_string()),
    ];
    match selection {
        MarketSelection::TopByMarketCap => {
            params.push(("per_page", query.per_page.to_string()));
            params.push(("page", query.page.to_string()));
        }
        MarketSelection::Ids(ids) => params.push(("ids", ids.join(","))),
    }
    params.push(("sparkline", query.sparkline.to_string()));
    params.push(("price_change_percentage", query.price_change_windows.to_string()));
    params
}

/// The detail call only needs market data; everything heavy is switched off.
pub(crate) fn detail_params() -> Vec<(&'static str, String)> {
    [
        ("localization", false),
        ("tickers", false),
        ("market_data", true),
        ("community_data", false),
        ("developer_data", false),
        ("sparkline", false),
    ]
    .into_iter()
    .map(|(key, value)| (key, value.to_string()))
    .collect()
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_markets(
        &self,
        selection: MarketSelection<'_>,
    ) -> Result<Vec<MarketEntry>, NetworkError> {
        let url = self.endpoint(COINGECKO.endpoints.markets_path)?;
        let params = market_params(&COINGECKO.markets, selection);
        self.get_json(url, &params).await
    }

    async fn fetch_coin(&self, id: &str) -> Result<CoinDetailResponse, NetworkError> {
        let segments: Vec<&str> = COINGECKO
            .endpoints
            .coin_path
            .iter()
            .copied()
            .chain([id])
            .collect();
        let url = self.endpoint(&segments)?;
        self.get_json(url, &detail_params()).await
    }

    async fn search_ids(&self, query: &str) -> Result<Vec<String>, NetworkError> {
        let url = self.endpoint(COINGECKO.endpoints.search_path)?;
        let response: SearchResponse = self
            .get_json(url, &[("query", query.to_string())])
            .await?;
        Ok(response.coins.into_iter().map(|coin| coin.id).collect())
    }
}
