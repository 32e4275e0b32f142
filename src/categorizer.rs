use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StatementError};

/// Category assigned when nothing matches or the description is absent.
pub const FALLBACK_CATEGORY: &str = "Other";

/// One categorization rule: a category plus the keywords that select it.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

/// Ordered keyword table. Declaration order is the tie-break: when a
/// description contains keywords from several categories, the first
/// listed category wins. Immutable once built.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    rules: Vec<CategoryRule>,
}

impl KeywordTable {
    pub fn new(mut rules: Vec<CategoryRule>) -> Self {
        for rule in &mut rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Self { rules }
    }

    /// Load an alternate rule set from a JSON array of
    /// `{"category": ..., "keywords": [...]}` entries. Array order is
    /// preserved and becomes the match order.
    pub fn from_json(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let rules: Vec<CategoryRule> = serde_json::from_str(&data)
            .map_err(|e| StatementError::Rules(e.to_string()))?;
        Ok(Self::new(rules))
    }

    /// Infer a category from a transaction description. `None` stands in
    /// for a missing or non-text description cell.
    pub fn infer(&self, description: Option<&str>) -> &str {
        let Some(desc) = description else {
            return FALLBACK_CATEGORY;
        };
        let desc = desc.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| desc.contains(k.as_str())) {
                return &rule.category;
            }
        }
        FALLBACK_CATEGORY
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let rule = |category: &str, keywords: &[&str]| CategoryRule {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };
        Self::new(vec![
            rule("Groceries", &[
                "market", "grocery", "supermarket", "store", "food mart", "walmart", "target",
            ]),
            rule("Dining", &[
                "restaurant", "cafe", "coffee", "dining", "food", "bakery", "takeout",
                "doordash", "uber eats",
            ]),
            rule("Transport", &[
                "uber", "lyft", "metro", "bus", "train", "taxi", "fuel", "petrol", "gas",
                "parking", "toll",
            ]),
            rule("Entertainment", &[
                "cinema", "movie", "netflix", "spotify", "music", "game", "hbo", "disney",
                "hulu", "ticket",
            ]),
            rule("Utilities", &[
                "electric", "water", "gas", "internet", "utility", "phone", "bill",
                "subscription", "service",
            ]),
            rule("Shopping", &[
                "amazon", "mall", "shopping", "store", "clothes", "purchase", "online", "retail",
            ]),
            rule("Income", &[
                "salary", "deposit", "refund", "credit", "interest", "payment received",
                "transfer in",
            ]),
            rule("Rent", &["rent", "lease", "housing", "apartment"]),
            rule("Healthcare", &[
                "doctor", "medical", "pharmacy", "hospital", "clinic", "health", "dental",
            ]),
            rule("Education", &[
                "tuition", "school", "college", "course", "book", "university",
            ]),
            rule("Travel", &[
                "hotel", "flight", "airline", "airbnb", "booking", "travel", "vacation",
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_basic() {
        let table = KeywordTable::default();
        assert_eq!(table.infer(Some("WALMART SUPERCENTER 1234")), "Groceries");
        assert_eq!(table.infer(Some("Monthly rent payment")), "Rent");
        assert_eq!(table.infer(Some("Salary March")), "Income");
        assert_eq!(table.infer(Some("Totally unrecognizable")), "Other");
    }

    #[test]
    fn test_infer_case_insensitive() {
        let table = KeywordTable::default();
        assert_eq!(
            table.infer(Some("STORE purchase")),
            table.infer(Some("store purchase"))
        );
    }

    #[test]
    fn test_infer_missing_description() {
        let table = KeywordTable::default();
        assert_eq!(table.infer(None), "Other");
        // An empty description matches no keyword
        assert_eq!(table.infer(Some("")), "Other");
    }

    #[test]
    fn test_first_match_wins() {
        // "store" appears in both Groceries and Shopping; Groceries is
        // declared first
        let table = KeywordTable::default();
        assert_eq!(table.infer(Some("store")), "Groceries");
        // "gas" appears in both Transport and Utilities
        assert_eq!(table.infer(Some("gas")), "Transport");
    }

    #[test]
    fn test_custom_table() {
        let rule = |category: &str, keywords: &[&str]| CategoryRule {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };
        let table = KeywordTable::new(vec![
            rule("Pets", &["VET", "kibble"]),
            rule("Hobby", &["vet", "paint"]),
        ]);
        assert_eq!(table.infer(Some("City Vet Clinic")), "Pets");
        assert_eq!(table.infer(Some("paint supplies")), "Hobby");
        assert_eq!(table.infer(Some("groceries")), "Other");
    }

    #[test]
    fn test_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(
            &path,
            r#"[
                {"category": "Coffee", "keywords": ["espresso", "latte"]},
                {"category": "Books", "keywords": ["espresso book machine"]}
            ]"#,
        )
        .unwrap();
        let table = KeywordTable::from_json(&path).unwrap();
        assert_eq!(table.infer(Some("Espresso Bar")), "Coffee");
    }

    #[test]
    fn test_from_json_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            KeywordTable::from_json(&path),
            Err(StatementError::Rules(_))
        ));
    }
}
