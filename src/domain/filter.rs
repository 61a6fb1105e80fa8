use {
    crate::domain::CategoryFilter,
    std::fmt,
    strum_macros::{AsRefStr, EnumIter, EnumString},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
pub enum SortKey {
    #[strum(serialize = "price")]
    Price,
    #[default]
    #[strum(serialize = "market_cap", serialize = "market-cap")]
    MarketCap,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "24h_change", serialize = "change")]
    Change24h,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => write!(f, "Price"),
            Self::MarketCap => write!(f, "Market Cap"),
            Self::Name => write!(f, "Name"),
            Self::Change24h => write!(f, "24h Change"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// User-controlled parameters that decide which assets are shown and in what
/// order. Every edit overwrites exactly one field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDescriptor {
    pub search: String,
    pub sort_by: SortKey,
    pub sort_direction: SortDirection,
    pub category: CategoryFilter,
}

impl FilterDescriptor {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey, sort_direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_direction = sort_direction;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_matches_landing_view() {
        let filter = FilterDescriptor::default();
        assert!(filter.search.is_empty());
        assert_eq!(filter.sort_by, SortKey::MarketCap);
        assert_eq!(filter.sort_direction, SortDirection::Desc);
        assert_eq!(filter.category, CategoryFilter::All);
    }

    #[test]
    fn test_sort_key_accepts_wire_names() {
        assert_eq!(SortKey::from_str("24h_change").unwrap(), SortKey::Change24h);
        assert_eq!(SortKey::from_str("market_cap").unwrap(), SortKey::MarketCap);
        assert_eq!(SortDirection::from_str("asc").unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.flipped().flipped(), SortDirection::Asc);
    }
}
