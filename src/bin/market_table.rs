//! Headless market listing: fetch, filter and sort like the dashboard, print as a table.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use {
        anyhow::{Context, Result},
        clap::Parser,
        crypto_tracker::{
            analysis::apply,
            config::{COINGECKO, CategoryTable},
            data::{CategoryClassifier, CoinGeckoProvider, MarketDataService},
            domain::{Asset, CategoryFilter, FilterDescriptor, SortDirection, SortKey},
            utils::{format_market_cap, format_percentage, format_price},
        },
        std::{path::PathBuf, sync::Arc},
        tabled::{Table, Tabled, settings::Style},
    };

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Case-insensitive name/symbol filter
        #[arg(long, default_value = "")]
        search: String,

        /// Resolve --search through the upstream search endpoint instead of the top list
        #[arg(long, default_value_t = false)]
        remote: bool,

        /// `all` or a category id such as `defi`
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// price | market_cap | name | 24h_change
        #[arg(long, default_value = "market_cap")]
        sort_by: SortKey,

        /// asc | desc
        #[arg(long, default_value = "desc")]
        direction: SortDirection,

        /// Maximum rows printed
        #[arg(long, default_value_t = 25)]
        limit: usize,

        #[arg(long, env = "CRYPTO_TRACKER_API_BASE_URL", default_value = COINGECKO.endpoints.base_url)]
        api_base_url: String,

        /// JSON category table replacing the bundled one
        #[arg(long)]
        categories: Option<PathBuf>,
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "#")]
        rank: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Symbol")]
        symbol: String,
        #[tabled(rename = "Category")]
        category: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "24h")]
        change_24h: String,
        #[tabled(rename = "Market Cap")]
        market_cap: String,
    }

    impl Row {
        fn new(asset: &Asset, table: &CategoryTable) -> Self {
            Self {
                rank: asset
                    .market_cap_rank
                    .map(|rank| rank.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                name: asset.name.clone(),
                symbol: asset.symbol.to_uppercase(),
                category: table.name_of(asset.category).to_string(),
                price: format_price(asset.current_price),
                change_24h: format_percentage(asset.price_change_percentage_24h),
                market_cap: format_market_cap(asset.market_cap),
            }
        }
    }

    /// Upstream search already picked the candidates (possibly by id), so only the
    /// top list is narrowed by the local name/symbol match.
    fn view_filter(args: &Args) -> FilterDescriptor {
        let filter = FilterDescriptor::default()
            .with_sort(args.sort_by, args.direction)
            .with_category(args.category);
        if args.remote {
            filter
        } else {
            filter.with_search(args.search.trim())
        }
    }

    #[tokio::main]
    pub(super) async fn main() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
        let args = Args::parse();

        let table = match &args.categories {
            Some(path) => CategoryTable::from_path(path)?,
            None => CategoryTable::bundled()?,
        };
        let provider = CoinGeckoProvider::new(&args.api_base_url)?;
        let service = MarketDataService::new(
            Arc::new(provider),
            Arc::new(CategoryClassifier::from_table(&table)),
        );

        let assets = if args.remote {
            service
                .search_assets(&args.search)
                .await
                .with_context(|| format!("upstream search for '{}' failed", args.search))?
        } else {
            service
                .fetch_market_list()
                .await
                .context("failed to fetch the market list")?
        };

        let filter = view_filter(&args);
        let view = apply(&assets, &filter);
        log::info!("{} of {} assets match", view.len(), assets.len());

        let rows: Vec<Row> = view
            .iter()
            .take(args.limit)
            .map(|asset| Row::new(asset, &table))
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
        println!(
            "{} shown, {} matching, {} fetched | sort: {} {}",
            view.len().min(args.limit),
            view.len(),
            assets.len(),
            args.sort_by,
            args.direction.as_ref()
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_remote_results_skip_local_search() {
            let remote = Args::parse_from(["market_table", "--remote", "--search", "wbtc"]);
            assert_eq!(view_filter(&remote).search, "");

            let local = Args::parse_from(["market_table", "--search", " eth "]);
            assert_eq!(view_filter(&local).search, "eth");
            assert_eq!(view_filter(&local).sort_by, SortKey::MarketCap);
        }

        #[test]
        fn test_remote_candidates_survive_filter() {
            let candidate = Asset {
                id: "wrapped-bitcoin".to_string(),
                symbol: "btc.b".to_string(),
                name: "Bitcoin Bridged".to_string(),
                image: String::new(),
                current_price: 60_000.0,
                market_cap: 1e9,
                market_cap_rank: Some(90),
                price_change_percentage_24h: 0.0,
                price_change_percentage_7d: None,
                sparkline_7d: None,
                category: Default::default(),
            };
            let remote = Args::parse_from(["market_table", "--remote", "--search", "wbtc"]);
            let assets = [candidate];
            assert_eq!(apply(&assets, &view_filter(&remote)).len(), 1);
        }
    }
}
