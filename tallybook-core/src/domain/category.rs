//! Expense categories and the id → display name lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lookup table from category id to display name
#[derive(Debug, Clone, Default)]
pub struct CategoryNames {
    names: HashMap<String, String>,
}

impl CategoryNames {
    pub fn from_categories(categories: &[Category]) -> Self {
        Self {
            names: categories
                .iter()
                .map(|c| (c.id.clone(), c.name.clone()))
                .collect(),
        }
    }

    /// Display name for `id`, or the raw id when it is unknown
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_falls_back_to_raw_id() {
        let names = CategoryNames::from_categories(&[Category::new("food", "Food & Dining")]);
        assert_eq!(names.resolve("food"), "Food & Dining");
        assert_eq!(names.resolve("misc-42"), "misc-42");
    }
}
