use sqlx::FromRow;

use crate::shared::types::CategoryMap;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub category_type: String,
}

impl Category {
    /// Label as surfaced to clients (always lower-cased)
    pub fn label(&self) -> String {
        self.category_type.to_lowercase()
    }
}

/// Build the id -> label mapping returned to clients
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories.iter().map(|c| (c.id, c.label())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_lowercases_labels() {
        let categories = vec![
            Category {
                id: 1,
                category_type: "Science".to_string(),
            },
            Category {
                id: 5,
                category_type: "ENTERTAINMENT".to_string(),
            },
        ];

        let map = category_map(&categories);
        assert_eq!(map.get(&1).map(String::as_str), Some("science"));
        assert_eq!(map.get(&5).map(String::as_str), Some("entertainment"));
        assert_eq!(map.len(), 2);
    }
}
