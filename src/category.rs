//! Category data model.
//!
//! Categories are loaded once per session from the seed fixture and are
//! read-only afterwards. Tasks reference a category by name; the color is
//! resolved by lookup when rendering.

use serde::{Deserialize, Serialize};

/// A task category with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Unique within the session.
    pub name: String,
    /// CSS color string, e.g. `"#6366f1"`.
    pub color: String,
}

/// Look up a category by name.
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_name_is_exact() {
        let categories = vec![
            Category {
                id: "1".to_string(),
                name: "Work".to_string(),
                color: "#6366f1".to_string(),
            },
            Category {
                id: "2".to_string(),
                name: "Personal".to_string(),
                color: "#ec4899".to_string(),
            },
        ];
        assert_eq!(find_by_name(&categories, "Work").map(|c| c.id.as_str()), Some("1"));
        assert!(find_by_name(&categories, "work").is_none());
        assert!(find_by_name(&categories, "Errands").is_none());
    }
}
