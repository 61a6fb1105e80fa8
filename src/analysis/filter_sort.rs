//! Derived view of the asset list: search, category filter, then a stable sort.

use std::{cmp::Ordering, sync::LazyLock};

use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};

use crate::domain::{Asset, FilterDescriptor, SortDirection, SortKey};

/// Root-locale collator (compiled data), built on first name sort.
static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .map_err(|err| log::warn!("Name collator unavailable, using case-folded order: {err}"))
        .ok()
});

/// Case-insensitive substring match on name or symbol. An empty needle matches everything.
pub fn matches_search(asset: &Asset, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    asset.name.to_lowercase().contains(&needle) || asset.symbol.to_lowercase().contains(&needle)
}

/// Locale-aware name ordering ("Ölcoin" sorts with the O's), exact order as tie-breaker.
fn compare_names(a: &str, b: &str) -> Ordering {
    let collated = match NAME_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    collated.then_with(|| a.cmp(b))
}

fn compare_by(key: SortKey, a: &Asset, b: &Asset) -> Ordering {
    match key {
        SortKey::Price => a.current_price.total_cmp(&b.current_price),
        SortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Change24h => a
            .price_change_percentage_24h
            .total_cmp(&b.price_change_percentage_24h),
    }
}

/// Pure function of (assets, filter). Ties keep their input order in both directions.
pub fn apply<'a>(assets: &'a [Asset], filter: &FilterDescriptor) -> Vec<&'a Asset> {
    let needle = filter.search.to_lowercase();
    let mut view: Vec<&Asset> = assets
        .iter()
        .filter(|asset| matches_search(asset, &needle))
        .filter(|asset| filter.category.admits(asset.category))
        .collect();

    // slice::sort_by is stable, and reversing the comparator (not the output) keeps ties in place.
    view.sort_by(|a, b| {
        let ordering = compare_by(filter.sort_by, a, b);
        match filter.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryFilter};
    use strum::IntoEnumIterator;

    fn asset(name: &str, symbol: &str, price: f64, cap: f64) -> Asset {
        Asset {
            id: name.to_lowercase(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            image: String::new(),
            current_price: price,
            market_cap: cap,
            market_cap_rank: None,
            price_change_percentage_24h: 0.0,
            price_change_percentage_7d: None,
            sparkline_7d: None,
            category: Category::Other,
        }
    }

    fn names(view: &[&Asset]) -> Vec<String> {
        view.iter().map(|a| a.name.clone()).collect()
    }

    fn sample() -> Vec<Asset> {
        let mut assets = vec![
            asset("Bitcoin", "btc", 50_000.0, 900e9),
            asset("Ether", "eth", 3_000.0, 400e9),
            asset("Tether", "usdt", 1.0, 110e9),
            asset("Dogecoin", "doge", 0.12, 17e9),
            asset("Ethena", "ena", 0.45, 3e9),
        ];
        assets[0].category = Category::StoreOfValue;
        assets[1].category = Category::SmartContract;
        assets[2].category = Category::Stablecoin;
        assets[3].category = Category::Meme;
        assets[4].category = Category::Defi;
        for (i, a) in assets.iter_mut().enumerate() {
            a.price_change_percentage_24h = [2.5, -1.0, 0.01, 7.3, -4.2][i];
        }
        assets
    }

    #[test]
    fn test_price_desc_scenario() {
        let assets = vec![
            asset("Bitcoin", "btc", 50_000.0, 900e9),
            asset("Ether", "eth", 3_000.0, 400e9),
        ];
        let filter = FilterDescriptor::default().with_sort(SortKey::Price, SortDirection::Desc);
        assert_eq!(names(&apply(&assets, &filter)), ["Bitcoin", "Ether"]);
    }

    #[test]
    fn test_search_eth_scenario() {
        let assets = vec![
            asset("Bitcoin", "btc", 50_000.0, 900e9),
            asset("Ether", "eth", 3_000.0, 400e9),
        ];
        let filter = FilterDescriptor::default()
            .with_sort(SortKey::Price, SortDirection::Desc)
            .with_search("eth");
        assert_eq!(names(&apply(&assets, &filter)), ["Ether"]);
    }

    #[test]
    fn test_unfiltered_keeps_everything_and_tie_order() {
        // Three assets share a price; input order among them must survive both directions.
        let assets = vec![
            asset("Gamma", "g", 1.0, 3.0),
            asset("Alpha", "a", 5.0, 1.0),
            asset("Beta", "b", 1.0, 2.0),
            asset("Delta", "d", 1.0, 4.0),
        ];
        let asc = FilterDescriptor::default().with_sort(SortKey::Price, SortDirection::Asc);
        assert_eq!(
            names(&apply(&assets, &asc)),
            ["Gamma", "Beta", "Delta", "Alpha"]
        );

        let desc = asc.clone().with_sort(SortKey::Price, SortDirection::Desc);
        assert_eq!(
            names(&apply(&assets, &desc)),
            ["Alpha", "Gamma", "Beta", "Delta"]
        );
    }

    #[test]
    fn test_search_results_all_match_and_none_missing() {
        let assets = sample();
        for needle in ["eth", "ETH", "e", "coin", "usdt", "zzz", "T"] {
            let filter = FilterDescriptor::default().with_search(needle);
            let view = apply(&assets, &filter);
            for a in &view {
                assert!(matches_search(a, needle), "{} should match {}", a.name, needle);
            }
            let expected = assets.iter().filter(|a| matches_search(a, needle)).count();
            assert_eq!(view.len(), expected, "needle {}", needle);
        }
    }

    #[test]
    fn test_search_matches_symbol_case_insensitively() {
        let assets = sample();
        let filter = FilterDescriptor::default().with_search("DOGE");
        assert_eq!(names(&apply(&assets, &filter)), ["Dogecoin"]);

        let filter = FilterDescriptor::default().with_search("Eth");
        let mut found = names(&apply(&assets, &filter));
        found.sort();
        assert_eq!(found, ["Ethena", "Ether", "Tether"]);
    }

    #[test]
    fn test_name_sort_is_locale_aware() {
        let assets = vec![
            asset("Zcash", "zec", 30.0, 1e9),
            asset("Ölcoin", "olc", 1.0, 1e6),
            asset("algorand", "algo", 0.2, 2e9),
            asset("Étoile", "eto", 1.0, 1e6),
        ];
        let asc = FilterDescriptor::default().with_sort(SortKey::Name, SortDirection::Asc);
        assert_eq!(
            names(&apply(&assets, &asc)),
            ["algorand", "Étoile", "Ölcoin", "Zcash"]
        );

        let desc = asc.clone().with_sort(SortKey::Name, SortDirection::Desc);
        assert_eq!(
            names(&apply(&assets, &desc)),
            ["Zcash", "Ölcoin", "Étoile", "algorand"]
        );
    }

    #[test]
    fn test_reversing_direction_reverses_output() {
        let assets = sample();
        for key in SortKey::iter() {
            let asc = FilterDescriptor::default().with_sort(key, SortDirection::Asc);
            let desc = asc.clone().with_sort(key, SortDirection::Desc);

            let mut reversed = apply(&assets, &asc);
            reversed.reverse();
            assert_eq!(reversed, apply(&assets, &desc), "key {:?}", key);

            let back = asc.clone().with_sort(key, SortDirection::Desc.flipped());
            assert_eq!(apply(&assets, &back), apply(&assets, &asc));
        }
    }

    #[test]
    fn test_category_filter() {
        let assets = sample();
        let filter = FilterDescriptor::default().with_category(CategoryFilter::Only(Category::Meme));
        assert_eq!(names(&apply(&assets, &filter)), ["Dogecoin"]);

        let filter = FilterDescriptor::default()
            .with_category(CategoryFilter::Only(Category::ValueTransfer));
        assert!(apply(&assets, &filter).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let assets = sample();
        let filter = FilterDescriptor::default()
            .with_search("eth")
            .with_category(CategoryFilter::Only(Category::Defi));
        assert_eq!(names(&apply(&assets, &filter)), ["Ethena"]);
    }

    #[test]
    fn test_sort_by_name_and_change() {
        let mut assets = sample();
        assets.push(asset("bitcoin cash", "bch", 400.0, 8e9));

        let by_name = FilterDescriptor::default().with_sort(SortKey::Name, SortDirection::Asc);
        assert_eq!(
            names(&apply(&assets, &by_name)),
            ["Bitcoin", "bitcoin cash", "Dogecoin", "Ethena", "Ether", "Tether"]
        );

        let by_change =
            FilterDescriptor::default().with_sort(SortKey::Change24h, SortDirection::Desc);
        assert_eq!(
            names(&apply(&assets, &by_change))[..3],
            ["Dogecoin", "Bitcoin", "Tether"]
        );
    }

    #[test]
    fn test_default_is_market_cap_desc() {
        let assets = sample();
        let view = apply(&assets, &FilterDescriptor::default());
        assert_eq!(
            names(&view),
            ["Bitcoin", "Ether", "Tether", "Dogecoin", "Ethena"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(apply(&[], &FilterDescriptor::default()).is_empty());
    }
}
