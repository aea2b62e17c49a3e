//! Filter → sort → paginate pipeline shared by every list page.
//!
//! A page keeps one [`ListQuery`] per entity; the store holds the records.
//! `apply` runs the filter over the whole store, sorts what matched, then
//! cuts the visible page out of the filtered rows.

use std::cmp::Ordering;
use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

/// Rows per page on every table view
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page-number buttons shown at once
pub const MAX_VISIBLE_PAGES: usize = 5;

/// `Low Stock` -> `low-stock`, `Inventory  Manager` -> `inventory-manager`
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Records that can be found by a free-text search box.
pub trait Searchable {
    /// Text fields the search box looks at
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring test; a blank term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Records that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort by column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text ordering used by the `Sortable` impls.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Ordering for `f64` columns (prices, totals, ratings); NaN sorts as equal.
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Predicate a filter panel applies to one record.
pub trait ListFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// How many filter controls are set (search included)
    fn active_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// `None` means "All" in a filter `<select>`.
pub fn option_matches<E: PartialEq>(wanted: &Option<E>, actual: &E) -> bool {
    wanted.as_ref().map_or(true, |w| w == actual)
}

/// Counts the `Some` options plus a non-blank search.
pub fn count_active(search: &str, options: &[bool]) -> usize {
    let search = usize::from(!search.trim().is_empty());
    search + options.iter().filter(|set| **set).count()
}

/// Search-only filter for records that need nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub search: String,
}

impl<T: Searchable> ListFilter<T> for SearchFilter {
    fn matches(&self, item: &T) -> bool {
        item.matches_search(&self.search)
    }

    fn active_count(&self) -> usize {
        count_active(&self.search, &[])
    }
}

/// 1-based page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Never less than one, an empty table still shows page 1 of 1.
    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.per_page.max(1))
        }
    }

    /// Pulls the page back into range after deletes or filter changes.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.total_pages(total));
    }

    pub fn clamped(mut self, total: usize) -> Self {
        self.clamp(total);
        self
    }

    /// Index range of the visible rows, bounded by `total`.
    pub fn range(&self, total: usize) -> Range<usize> {
        let per_page = self.per_page.max(1);
        let start = (self.page.max(1) - 1).saturating_mul(per_page).min(total);
        let end = start.saturating_add(per_page).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// Page buttons centred on the current page.
    ///
    /// With 12 pages, page 6 and a window of 5 this is `4..=8`; near the
    /// edges the window slides so it stays full when there are enough pages.
    pub fn window(&self, total: usize, max_visible: usize) -> RangeInclusive<usize> {
        let max_visible = max_visible.max(1);
        let total_pages = self.total_pages(total);
        let page = self.page.clamp(1, total_pages);

        let mut start = page.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(total_pages);
        if end + 1 - start < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }
        start..=end
    }

    /// `Showing 11 to 20 of 35 results`
    pub fn summary(&self, total: usize) -> String {
        if total == 0 {
            return "Showing 0 to 0 of 0 results".to_string();
        }
        let range = self.clamped(total).range(total);
        format!(
            "Showing {} to {} of {} results",
            range.start + 1,
            range.end,
            total
        )
    }
}

/// Filter, sort column and page for one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub filter: F,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
    pub pagination: Pagination,
}

impl<F: Default> Default for ListQuery<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> ListQuery<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            sort_field: None,
            sort_ascending: true,
            pagination: Pagination::default(),
        }
    }

    /// Any filter change sends the view back to the first page.
    pub fn update_filter(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.filter);
        self.pagination.page = 1;
    }

    pub fn reset_filter(&mut self)
    where
        F: Default,
    {
        self.update_filter(|f| *f = F::default());
    }

    /// Same column flips direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.pagination.page = page.max(1);
    }

    /// Every record that passes the filter, in store order.
    pub fn matching<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        F: ListFilter<T>,
    {
        items.iter().filter(|item| self.filter.matches(item)).collect()
    }

    pub fn apply<T>(&self, items: &[T]) -> ListPage<T>
    where
        T: Clone + Sortable,
        F: ListFilter<T>,
    {
        let mut rows: Vec<T> = items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect();

        if let Some(field) = &self.sort_field {
            sort_list(&mut rows, field, self.sort_ascending);
        }

        let total = rows.len();
        let pagination = self.pagination.clamped(total);
        let visible = pagination.range(total);
        let rows = rows.drain(visible).collect();

        ListPage {
            rows,
            total,
            pagination,
        }
    }
}

/// The visible slice of a filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    /// Rows that matched the filter, across all pages
    pub total: usize,
    /// Page actually shown (clamped)
    pub pagination: Pagination,
}

impl<T> ListPage<T> {
    pub fn summary(&self) -> String {
        self.pagination.summary(self.total)
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.total)
    }

    pub fn window(&self) -> RangeInclusive<usize> {
        self.pagination.window(self.total, MAX_VISIBLE_PAGES)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        qty: u32,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => compare_text(&self.name, &other.name),
            }
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                name: format!("Item {i:02}"),
                qty: n - i,
            })
            .collect()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Low Stock"), "low-stock");
        assert_eq!(slugify("  Inventory   Manager "), "inventory-manager");
        assert_eq!(slugify("Tablets"), "tablets");
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let row = Row {
            name: "Paracetamol".into(),
            qty: 1,
        };
        assert!(row.matches_search(""));
        assert!(row.matches_search("   "));
        assert!(row.matches_search("PARA"));
        assert!(!row.matches_search("ibuprofen"));
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::default();
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(p.total_pages(35), 4);
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut p = Pagination::new(4, 10);
        p.clamp(25);
        assert_eq!(p.page, 3);
        p.clamp(0);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_slice_last_page() {
        let items: Vec<u32> = (0..23).collect();
        let p = Pagination::new(3, 10);
        assert_eq!(p.slice(&items), &[20, 21, 22]);
        let beyond = Pagination::new(9, 10);
        assert!(beyond.slice(&items).is_empty());
    }

    #[test]
    fn test_window_centres_and_slides() {
        let total = 120; // 12 pages
        assert_eq!(Pagination::new(1, 10).window(total, 5), 1..=5);
        assert_eq!(Pagination::new(6, 10).window(total, 5), 4..=8);
        assert_eq!(Pagination::new(12, 10).window(total, 5), 8..=12);
        assert_eq!(Pagination::new(2, 10).window(30, 5), 1..=3);
    }

    #[test]
    fn test_summary() {
        assert_eq!(Pagination::default().summary(0), "Showing 0 to 0 of 0 results");
        assert_eq!(Pagination::new(2, 10).summary(35), "Showing 11 to 20 of 35 results");
        assert_eq!(Pagination::new(4, 10).summary(35), "Showing 31 to 35 of 35 results");
    }

    #[test]
    fn test_apply_pages_filtered_rows() {
        let items = rows(25);
        let mut query = ListQuery::new(SearchFilter::default());
        query.go_to(3);
        let page = query.apply(&items);
        assert_eq!(page.total, 25);
        assert_eq!(page.rows.len(), 5);

        // "Item 1" matches Item 10..=19; page 3 no longer exists
        query.filter.search = "item 1".into();
        let page = query.apply(&items);
        assert_eq!(page.total, 10);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.rows.first().map(|r| r.name.as_str()), Some("Item 10"));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = ListQuery::new(SearchFilter::default());
        query.go_to(2);
        query.update_filter(|f| f.search = "x".into());
        assert_eq!(query.pagination.page, 1);
    }

    #[test]
    fn test_toggle_sort() {
        let items = rows(3);
        let mut query: ListQuery<SearchFilter> = ListQuery::default();
        query.toggle_sort("qty");
        let page = query.apply(&items);
        assert_eq!(page.rows[0].qty, 0);

        query.toggle_sort("qty");
        assert!(!query.sort_ascending);
        let page = query.apply(&items);
        assert_eq!(page.rows[0].qty, 2);

        query.toggle_sort("name");
        assert!(query.sort_ascending);
    }

    #[test]
    fn test_active_count() {
        let filter = SearchFilter { search: " ".into() };
        assert!(<SearchFilter as ListFilter<Row>>::is_empty(&filter));
        assert_eq!(count_active("para", &[true, false, true]), 3);
    }
}
