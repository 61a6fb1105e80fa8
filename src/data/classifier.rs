use std::collections::HashMap;

use crate::{config::CategoryTable, domain::Category};

/// Static id → category lookup. Anything not in the table is `other`.
#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    assignments: HashMap<String, Category>,
}

impl CategoryClassifier {
    pub fn new(assignments: HashMap<String, Category>) -> Self {
        Self { assignments }
    }

    pub fn from_table(table: &CategoryTable) -> Self {
        Self::new(table.assignments.clone())
    }

    #[inline]
    pub fn classify(&self, id: &str) -> Category {
        self.assignments.get(id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_are_other() {
        let classifier = CategoryClassifier::new(HashMap::from([(
            "bitcoin".to_string(),
            Category::StoreOfValue,
        )]));
        assert_eq!(classifier.classify("bitcoin"), Category::StoreOfValue);
        assert_eq!(classifier.classify("not-a-coin"), Category::Other);
        assert_eq!(classifier.classify(""), Category::Other);
        // Lookup is exact, ids are case-sensitive upstream.
        assert_eq!(classifier.classify("Bitcoin"), Category::Other);
        assert_eq!(CategoryClassifier::default().classify("bitcoin"), Category::Other);
    }

    #[test]
    fn test_every_table_id_gets_its_category() {
        let table = CategoryTable::bundled().unwrap();
        let classifier = CategoryClassifier::from_table(&table);
        assert_eq!(classifier.len(), table.assignments.len());
        for (id, category) in &table.assignments {
            assert_eq!(classifier.classify(id), *category, "id {}", id);
        }
        assert_eq!(classifier.classify("ethereum"), Category::SmartContract);
        assert_eq!(classifier.classify("ripple"), Category::ValueTransfer);
        assert_eq!(classifier.classify("axie-infinity"), Category::Gamefi);
        assert_eq!(classifier.classify("uniswap"), Category::Defi);
    }
}
