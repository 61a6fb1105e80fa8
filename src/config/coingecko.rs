/// Upstream REST endpoints, as path segments appended to `base_url`.
pub struct Endpoints {
    pub base_url: &'static str,
    pub markets_path: &'static [&'static str],
    /// The asset id is pushed as one more segment.
    pub coin_path: &'static [&'static str],
    pub search_path: &'static [&'static str],
}

/// Fixed parameters of every markets request.
pub struct MarketQuery {
    pub vs_currency: &'static str,
    pub order: &'static str,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
    pub price_change_windows: &'static str,
    /// Remote search resolves at most this many candidate ids.
    pub search_result_limit: usize,
}

pub struct WebLinks {
    pub home_url: &'static str,
    pub coin_page_base_url: &'static str,
}

pub struct ClientDefaults {
    pub user_agent: &'static str,
}

pub struct CoinGeckoConfig {
    pub endpoints: Endpoints,
    pub markets: MarketQuery,
    pub web: WebLinks,
    pub client: ClientDefaults,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    endpoints: Endpoints {
        base_url: "https://api.coingecko.com/api/v3",
        markets_path: &["coins", "markets"],
        coin_path: &["coins"],
        search_path: &["search"],
    },
    markets: MarketQuery {
        vs_currency: "usd",
        order: "market_cap_desc",
        per_page: 100,
        page: 1,
        sparkline: true,
        price_change_windows: "24h,7d",
        search_result_limit: 10,
    },
    web: WebLinks {
        home_url: "https://www.coingecko.com",
        coin_page_base_url: "https://www.coingecko.com/en/coins",
    },
    client: ClientDefaults {
        user_agent: concat!("crypto-tracker/", env!("CARGO_PKG_VERSION")),
    },
};
