use {
    crate::{
        config::COINGECKO,
        domain::Category,
        utils::{strip_html, truncate_description},
    },
    chrono::{DateTime, Utc},
};

/// Market snapshot of a single asset as returned by the markets endpoint,
/// tagged with its local category.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub market_cap_rank: Option<u32>,
    pub price_change_percentage_24h: f64,
    pub price_change_percentage_7d: Option<f64>,
    pub sparkline_7d: Option<Vec<f64>>,
    pub category: Category,
}

impl Asset {
    /// 7d trend used to colour the sparkline. Missing data counts as down.
    pub fn trending_up_7d(&self) -> bool {
        self.price_change_percentage_7d.is_some_and(|pct| pct >= 0.0)
    }

    pub fn sparkline(&self) -> &[f64] {
        self.sparkline_7d.as_deref().unwrap_or_default()
    }
}

/// Extended per-asset data fetched lazily when the detail overlay opens.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    /// English description, HTML included.
    pub description_html: String,
    pub homepage: Option<String>,
    pub blockchain_sites: Vec<String>,
    pub current_price: f64,
    pub market_cap: f64,
    pub price_change_percentage_24h: f64,
    pub total_volume: f64,
    pub circulating_supply: f64,
    pub max_supply: Option<f64>,
    pub ath: f64,
    pub ath_date: Option<DateTime<Utc>>,
}

impl AssetDetail {
    pub const DESCRIPTION_LIMIT: usize = 300;

    /// Plain-text description clipped for the overlay. `None` when upstream sent nothing.
    pub fn description_text(&self) -> Option<String> {
        let text = strip_html(&self.description_html);
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(truncate_description(text, Self::DESCRIPTION_LIMIT))
    }

    pub fn coingecko_url(&self) -> String {
        format!("{}/{}", COINGECKO.web.coin_page_base_url, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(description_html: &str) -> AssetDetail {
        AssetDetail {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            image: String::new(),
            description_html: description_html.to_string(),
            homepage: None,
            blockchain_sites: Vec::new(),
            current_price: 0.0,
            market_cap: 0.0,
            price_change_percentage_24h: 0.0,
            total_volume: 0.0,
            circulating_supply: 0.0,
            max_supply: None,
            ath: 0.0,
            ath_date: None,
        }
    }

    #[test]
    fn test_description_is_stripped_and_clipped() {
        let html = format!("<p>{}</p>", "a".repeat(400));
        let text = detail(&html).description_text().unwrap();
        assert_eq!(text.chars().count(), AssetDetail::DESCRIPTION_LIMIT + 3);
        assert!(text.ends_with("..."));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_empty_description_is_none() {
        assert_eq!(detail("").description_text(), None);
        assert_eq!(detail("<br/>  ").description_text(), None);
    }

    #[test]
    fn test_coingecko_url() {
        assert_eq!(
            detail("").coingecko_url(),
            "https://www.coingecko.com/en/coins/bitcoin"
        );
    }
}
