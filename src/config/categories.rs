//! Category configuration: display metadata per bucket plus the id → bucket table.

use {
    crate::domain::{Category, CategoryInfo},
    anyhow::{Context, Result, bail},
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
    strum::IntoEnumIterator,
};

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// The table compiled into the binary. `--categories` replaces it on native builds.
pub const BUNDLED_CATEGORY_TABLE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/categories.json"
));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    /// Display order of the landing view sections.
    pub categories: Vec<CategoryInfo>,
    /// Upstream asset id → category. Ids missing here classify as `other`.
    #[serde(default)]
    pub assignments: HashMap<String, Category>,
}

impl CategoryTable {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATEGORY_TABLE).context("bundled category table is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let table: CategoryTable =
            serde_json::from_str(json).context("failed to parse category table")?;
        table.validate()?;
        Ok(table)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read category table {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Every category needs exactly one info entry so the filter bar and the
    /// sections can render all of them.
    fn validate(&self) -> Result<()> {
        for category in Category::iter() {
            let count = self.categories.iter().filter(|c| c.id == category).count();
            match count {
                1 => {}
                0 => bail!("category '{}' has no description entry", category),
                n => bail!("category '{}' is described {} times", category, n),
            }
        }
        Ok(())
    }

    pub fn info(&self, category: Category) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == category)
    }

    /// Human name for a category, falling back to its id.
    pub fn name_of(&self, category: Category) -> &str {
        self.info(category)
            .map(|info| info.name.as_str())
            .unwrap_or_else(|| <&'static str>::from(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_loads() {
        let table = CategoryTable::bundled().unwrap();
        assert_eq!(table.categories.len(), 8);
        assert_eq!(table.categories[0].id, Category::StoreOfValue);
        assert_eq!(table.name_of(Category::Meme), "Meme Coins");
        assert_eq!(
            table.assignments.get("bitcoin"),
            Some(&Category::StoreOfValue)
        );
        assert_eq!(table.assignments.get("tether"), Some(&Category::Stablecoin));
        assert_eq!(table.assignments.get("dogecoin"), Some(&Category::Meme));
    }

    #[test]
    fn test_name_of_falls_back_to_id() {
        let mut table = CategoryTable::bundled().unwrap();
        table.categories.retain(|c| c.id != Category::StoreOfValue);
        assert_eq!(table.name_of(Category::StoreOfValue), "store-of-value");
        assert_eq!(table.name_of(Category::Defi), table.info(Category::Defi).unwrap().name);
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let json = r#"{
            "categories": [
                { "id": "meme", "name": "Meme", "description": "", "examples": [] }
            ],
            "assignments": { "pepe": "meme" }
        }"#;
        let err = CategoryTable::from_json(json).unwrap_err();
        assert!(format!("{:#}", err).contains("has no description entry"));
    }

    #[test]
    fn test_unknown_category_id_is_rejected() {
        let mut table = CategoryTable::bundled().unwrap();
        let mut json = serde_json::to_value(&table).unwrap();
        json["assignments"]["bitcoin"] = serde_json::json!("digital-gold");
        assert!(CategoryTable::from_json(&json.to_string()).is_err());

        table.categories.push(table.categories[0].clone());
        let json = serde_json::to_string(&table).unwrap();
        let err = CategoryTable::from_json(&json).unwrap_err();
        assert!(format!("{:#}", err).contains("described 2 times"));
    }
}
