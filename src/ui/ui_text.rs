use std::sync::LazyLock;

// Glyphs from egui's bundled emoji font.
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_CLOSE: &str = "❌";
pub const ICON_RELOAD: &str = "🔄";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_INFO: &str = "ℹ";
pub const ICON_LINK: &str = "🔗";
pub const ICON_GLOBE: &str = "🌐";
pub const ICON_COINS: &str = "💰";
pub const ICON_SORT_ASC: &str = "⬆";
pub const ICON_SORT_DESC: &str = "⬇";

pub struct UiText {
    pub app_title: String,
    pub nav_categories: String,
    pub nav_all: String,

    pub icon_close: String,
    pub icon_sort_asc: String,
    pub icon_sort_desc: String,

    // --- Loading / errors ---
    pub ls_title: String,
    pub ls_fetching: String,
    pub error_list: String,
    pub error_detail: String,
    pub error_search: String,
    pub button_reload: String,
    pub button_close: String,

    // --- Top panel ---
    pub search_hint: String,
    pub search_upstream: String,
    pub search_upstream_hover: String,

    // --- Landing ---
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_points: &'static [(&'static str, &'static str)],
    pub categories_heading: String,
    pub categories_subtitle: String,
    pub all_heading: String,
    pub all_subtitle: String,
    pub label_examples: String,

    // --- Filter bar ---
    pub filter_category: String,
    pub filter_all_categories: String,
    pub filter_sort_by: String,
    pub no_matches: String,

    // --- Search results ---
    pub search_results_for: String,
    pub search_found: String,
    pub search_none: String,
    pub search_upstream_heading: String,
    pub search_upstream_running: String,
    pub search_upstream_none: String,

    // --- Card ---
    pub card_market_cap: String,
    pub card_details_hover: String,

    // --- Detail window ---
    pub detail_market_info: String,
    pub detail_price: String,
    pub detail_market_cap: String,
    pub detail_change_24h: String,
    pub detail_volume: String,
    pub detail_circulating: String,
    pub detail_max_supply: String,
    pub detail_ath: String,
    pub detail_ath_date: String,
    pub detail_about: String,
    pub detail_no_description: String,
    pub detail_links: String,
    pub detail_website: String,
    pub detail_explorer: String,
    pub detail_coingecko: String,
    pub label_unlimited: String,
    pub label_unknown: String,

    // --- Footer ---
    pub footer_tagline: String,
    pub footer_attribution: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: format!("{} CryptoTracker", ICON_COINS),
    nav_categories: "Categories".to_string(),
    nav_all: "All Cryptocurrencies".to_string(),

    icon_close: ICON_CLOSE.to_string(),
    icon_sort_asc: ICON_SORT_ASC.to_string(),
    icon_sort_desc: ICON_SORT_DESC.to_string(),

    ls_title: "CryptoTracker".to_string(),
    ls_fetching: "Fetching market data...".to_string(),
    error_list: format!(
        "{} Failed to fetch cryptocurrency data. Please try again later.",
        ICON_WARNING
    ),
    error_detail: "Failed to load coin details. Please try again later.".to_string(),
    error_search: "Upstream search failed".to_string(),
    button_reload: format!("{} Reload", ICON_RELOAD),
    button_close: "Close".to_string(),

    search_hint: format!("{} Search cryptocurrencies...", ICON_SEARCH),
    search_upstream: format!("{} Search all coins", ICON_GLOBE),
    search_upstream_hover: "Look the term up beyond the top 100 by market cap".to_string(),

    hero_title: "Track Cryptocurrencies in Real-Time".to_string(),
    hero_subtitle: "Explore the world of cryptocurrencies across different categories, \
                    with real-time prices and market data."
        .to_string(),
    hero_points: &[
        (
            "Real-Time Data",
            "Get the latest cryptocurrency prices and market data updated in real-time.",
        ),
        (
            "Categorized View",
            "Browse cryptocurrencies by category to better understand the market.",
        ),
        (
            "Advanced Search",
            "Easily find and filter cryptocurrencies based on your preferences.",
        ),
    ],
    categories_heading: "Cryptocurrency Categories".to_string(),
    categories_subtitle: "Explore the top assets of each category".to_string(),
    all_heading: "All Cryptocurrencies".to_string(),
    all_subtitle: "Filter and sort the top 100 by market cap".to_string(),
    label_examples: "Examples:".to_string(),

    filter_category: "Category".to_string(),
    filter_all_categories: "All Categories".to_string(),
    filter_sort_by: "Sort by".to_string(),
    no_matches: "No cryptocurrencies found matching your criteria.".to_string(),

    search_results_for: "Search results for:".to_string(),
    search_found: "Found".to_string(),
    search_none: "No cryptocurrencies found matching".to_string(),
    search_upstream_heading: "More results from CoinGecko".to_string(),
    search_upstream_running: "Searching CoinGecko...".to_string(),
    search_upstream_none: "CoinGecko has no further matches".to_string(),

    card_market_cap: "Market Cap:".to_string(),
    card_details_hover: format!("{} Click for details", ICON_INFO),

    detail_market_info: "Market Information".to_string(),
    detail_price: "Current Price".to_string(),
    detail_market_cap: "Market Cap".to_string(),
    detail_change_24h: "24h Change".to_string(),
    detail_volume: "24h Trading Volume".to_string(),
    detail_circulating: "Circulating Supply".to_string(),
    detail_max_supply: "Max Supply".to_string(),
    detail_ath: "All-Time High".to_string(),
    detail_ath_date: "ATH Date".to_string(),
    detail_about: "About".to_string(),
    detail_no_description: "No description available.".to_string(),
    detail_links: "Links".to_string(),
    detail_website: format!("{} Official Website", ICON_GLOBE),
    detail_explorer: format!("{} Explorer", ICON_LINK),
    detail_coingecko: format!("{} View on CoinGecko", ICON_LINK),
    label_unlimited: "Unlimited".to_string(),
    label_unknown: "Unknown".to_string(),

    footer_tagline: "Track cryptocurrency prices and market data in real-time across \
                     different categories."
        .to_string(),
    footer_attribution: "Data provided by CoinGecko".to_string(),
});
