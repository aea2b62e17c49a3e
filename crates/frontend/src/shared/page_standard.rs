//! Page category constants.
//!
//! Every page root carries an `id` of the form `{entity}--{category}`
//! (e.g. `"a001_stock--list"`) and `data-page-category`, so the DOM id of
//! any page leads straight to its `domain/` or `system/` directory.

/// Records in a table or card grid with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only overview built from several stores
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Application settings
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// `{entity}--{category}` with both halves present
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("a001_stock--list"));
        assert!(!is_valid_page_id("a001_stock"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn categories() {
        assert!(is_known_category("dashboard"));
        assert!(!is_known_category("legacy"));
    }
}
