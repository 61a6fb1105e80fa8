use {
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr},
};

/// Fixed classification bucket for an asset. The ids match the keys used in
/// `resources/categories.json`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    StoreOfValue,
    SmartContract,
    Stablecoin,
    Defi,
    ValueTransfer,
    Gamefi,
    Meme,
    #[default]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Static human-facing description of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
}

/// Category selector of the filter bar: everything, or one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[inline]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Category::from_str(s).map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_ids_are_kebab_case() {
        assert_eq!(Category::StoreOfValue.to_string(), "store-of-value");
        assert_eq!(Category::ValueTransfer.as_ref(), "value-transfer");
        assert_eq!(Category::from_str("gamefi").unwrap(), Category::Gamefi);

        let json = serde_json::to_string(&Category::SmartContract).unwrap();
        assert_eq!(json, "\"smart-contract\"");
    }

    #[test]
    fn test_every_category_parses_back() {
        for category in Category::iter() {
            assert_eq!(Category::from_str(category.as_ref()).unwrap(), category);
        }
        assert_eq!(Category::iter().count(), 8);
    }

    #[test]
    fn test_category_filter_parse_and_admit() {
        assert_eq!(CategoryFilter::from_str("all").unwrap(), CategoryFilter::All);
        let meme = CategoryFilter::from_str("meme").unwrap();
        assert_eq!(meme, CategoryFilter::Only(Category::Meme));
        assert!(meme.admits(Category::Meme));
        assert!(!meme.admits(Category::Defi));
        assert!(CategoryFilter::All.admits(Category::Other));
        assert!(CategoryFilter::from_str("shitcoin").is_err());
    }
}
