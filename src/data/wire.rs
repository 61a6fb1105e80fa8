//! CoinGecko response payloads, decoded as-is, then mapped into domain types.

use {
    crate::{
        data::{CategoryClassifier, NetworkError},
        domain::{Asset, AssetDetail},
    },
    chrono::{DateTime, Utc},
    serde::Deserialize,
    std::collections::HashMap,
};

/// One row of `/coins/markets`. Upstream sends `null` for several numeric
/// fields on thinly traded coins.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<SparklineIn7d>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SparklineIn7d {
    #[serde(default)]
    pub price: Vec<Option<f64>>,
}

impl MarketEntry {
    pub fn into_asset(self, classifier: &CategoryClassifier) -> Asset {
        let category = classifier.classify(&self.id);
        let sparkline_7d = self
            .sparkline_in_7d
            .map(|s| s.price.into_iter().flatten().collect::<Vec<f64>>())
            .filter(|prices| !prices.is_empty());
        Asset {
            category,
            symbol: self.symbol,
            name: self.name,
            image: self.image.unwrap_or_default(),
            current_price: self.current_price.unwrap_or_default(),
            market_cap: self.market_cap.unwrap_or_default(),
            market_cap_rank: self.market_cap_rank,
            price_change_percentage_24h: self.price_change_percentage_24h.unwrap_or_default(),
            price_change_percentage_7d: self.price_change_percentage_7d_in_currency,
            sparkline_7d,
            id: self.id,
        }
    }
}

/// `/search` response; only the coin ids are used.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchCoin {
    pub id: String,
}

/// Per-currency values, e.g. `{"usd": 67000.0, "eur": ...}`.
type CurrencyMap<T> = HashMap<String, Option<T>>;

fn usd<T: Clone>(map: &CurrencyMap<T>) -> Option<T> {
    map.get("usd").cloned().flatten()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Vec<Option<String>>,
    #[serde(default)]
    pub blockchain_site: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinImages {
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarketData {
    #[serde(default)]
    pub current_price: CurrencyMap<f64>,
    #[serde(default)]
    pub market_cap: CurrencyMap<f64>,
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub total_volume: CurrencyMap<f64>,
    pub circulating_supply: Option<f64>,
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: CurrencyMap<f64>,
    #[serde(default)]
    pub ath_date: CurrencyMap<String>,
}

/// `/coins/{id}` with market data and without tickers/community/developer blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetailResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub links: CoinLinks,
    #[serde(default)]
    pub image: CoinImages,
    pub market_data: Option<CoinMarketData>,
}

fn non_empty(links: Vec<Option<String>>) -> impl Iterator<Item = String> {
    links
        .into_iter()
        .flatten()
        .map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty())
}

impl TryFrom<CoinDetailResponse> for AssetDetail {
    type Error = NetworkError;

    fn try_from(raw: CoinDetailResponse) -> Result<Self, Self::Error> {
        let market = raw.market_data.ok_or_else(|| {
            NetworkError::Decode(format!("detail for '{}' has no market_data", raw.id))
        })?;
        let ath_date = usd(&market.ath_date)
            .and_then(|date| date.parse::<DateTime<Utc>>().ok());

        Ok(AssetDetail {
            description_html: raw.description.en.unwrap_or_default(),
            homepage: non_empty(raw.links.homepage).next(),
            blockchain_sites: non_empty(raw.links.blockchain_site).collect(),
            image: raw.image.large.unwrap_or_default(),
            current_price: usd(&market.current_price).unwrap_or_default(),
            market_cap: usd(&market.market_cap).unwrap_or_default(),
            price_change_percentage_24h: market.price_change_percentage_24h.unwrap_or_default(),
            total_volume: usd(&market.total_volume).unwrap_or_default(),
            circulating_supply: market.circulating_supply.unwrap_or_default(),
            max_supply: market.max_supply.filter(|supply| *supply > 0.0),
            ath: usd(&market.ath).unwrap_or_default(),
            ath_date,
            id: raw.id,
            name: raw.name,
            symbol: raw.symbol,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn classifier() -> CategoryClassifier {
        CategoryClassifier::new(HashMap::from([(
            "bitcoin".to_string(),
            Category::StoreOfValue,
        )]))
    }

    #[test]
    fn test_market_entries_map_to_assets() {
        let entries: Vec<MarketEntry> = serde_json::from_str(fixtures::MARKETS).unwrap();
        let assets: Vec<Asset> = entries
            .into_iter()
            .map(|e| e.into_asset(&classifier()))
            .collect();

        let btc = &assets[0];
        assert_eq!(btc.category, Category::StoreOfValue);
        assert_eq!(btc.market_cap_rank, Some(1));
        assert_eq!(btc.price_change_percentage_7d, Some(-3.5));
        assert_eq!(btc.sparkline(), [66000.1, 66500.2, 67012.5]);
        assert!(!btc.trending_up_7d());

        let fresh = &assets[1];
        assert_eq!(fresh.category, Category::Other);
        assert_eq!(fresh.current_price, 0.0);
        assert_eq!(fresh.market_cap_rank, None);
        assert!(fresh.sparkline().is_empty());
    }

    #[test]
    fn test_detail_maps_usd_fields_and_links() {
        let raw: CoinDetailResponse = serde_json::from_str(fixtures::DETAIL).unwrap();
        let detail = AssetDetail::try_from(raw).unwrap();

        assert_eq!(detail.current_price, 67012.5);
        assert_eq!(detail.total_volume, 28e9);
        assert_eq!(detail.max_supply, Some(21e6));
        assert_eq!(detail.homepage.as_deref(), Some("http://www.bitcoin.org"));
        assert_eq!(detail.blockchain_sites, ["https://mempool.space/"]);
        assert_eq!(
            detail.ath_date.map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2024-03-14".to_string())
        );
        assert_eq!(
            detail.description_text().as_deref(),
            Some("Bitcoin is the first decentralized currency.")
        );
    }

    #[test]
    fn test_detail_without_market_data_is_decode_error() {
        let raw: CoinDetailResponse =
            serde_json::from_str(r#"{ "id": "x", "name": "X", "symbol": "x" }"#).unwrap();
        assert!(matches!(
            AssetDetail::try_from(raw),
            Err(NetworkError::Decode(_))
        ));
    }

    #[test]
    fn test_malformed_markets_payload_is_rejected() {
        let result: Result<Vec<MarketEntry>, NetworkError> =
            serde_json::from_str(r#"{"error": "rate limited"}"#).map_err(NetworkError::from);
        assert!(matches!(result, Err(NetworkError::Decode(_))));
    }

    #[test]
    fn test_search_ids() {
        let response: SearchResponse = serde_json::from_str(fixtures::SEARCH).unwrap();
        let ids: Vec<&str> = response.coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ethereum", "ethena"]);
    }
}
