use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    require_non_negative, require_text, AggregateRoot, EntityId, ValidationError,
};
use crate::shared::export::TabularExport;
use crate::shared::list_query::{
    compare_text, count_active, option_matches, ListFilter, Searchable, Sortable,
};
use crate::shared::print::Printable;

// ============================================================================
// Enums
// ============================================================================

crate::label_enum! {
    /// Dosage form the item is stocked as
    pub enum StockCategory {
        Tablets => "Tablets",
        Capsules => "Capsules",
        Syrups => "Syrups",
        Injections => "Injections",
        Ointments => "Ointments",
    }
}

crate::label_enum! {
    pub enum StockStatus {
        InStock => "In Stock",
        LowStock => "Low Stock",
        OutOfStock => "Out of Stock",
    }
}

impl StockStatus {
    /// Badge colour used in the table
    pub fn badge_color(&self) -> &'static str {
        match self {
            StockStatus::InStock => "success",
            StockStatus::LowStock => "warning",
            StockStatus::OutOfStock => "danger",
        }
    }
}

/// Status is never typed in: zero is out of stock, at or below the minimum is low.
pub fn derive_stock_status(stock: u32, min_level: u32) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock <= min_level {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A stocked medicine with its reorder level and expiry date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: EntityId,
    pub name: String,
    pub sku: String,
    pub category: StockCategory,
    pub stock: u32,
    pub min_level: u32,
    pub expiry: NaiveDate,
    pub status: StockStatus,
}

impl StockItem {
    pub fn new(id: EntityId, dto: &StockDto) -> Result<Self, ValidationError> {
        let (category, stock, min_level, expiry) = dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            sku: dto.sku.trim().to_string(),
            category,
            stock,
            min_level,
            expiry,
            status: derive_stock_status(stock, min_level),
        })
    }

    /// Full-field overwrite from the edit form; status is recomputed.
    pub fn update(&mut self, dto: &StockDto) -> Result<(), ValidationError> {
        let updated = Self::new(self.id, dto)?;
        *self = updated;
        Ok(())
    }

    /// Expires on or before `today + days` (already expired included)
    pub fn expires_within(&self, today: NaiveDate, days: i64) -> bool {
        self.expiry <= today + chrono::Duration::days(days)
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry < today
    }

    pub fn needs_reorder(&self) -> bool {
        self.status != StockStatus::InStock
    }
}

impl AggregateRoot for StockItem {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "stock"
    }

    fn element_name() -> &'static str {
        "Stock Item"
    }

    fn list_name() -> &'static str {
        "Stock Items"
    }
}

/// Seed data the app starts with
pub fn demo_set() -> Vec<StockItem> {
    let item = |id, name: &str, sku: &str, category, stock, min_level, (y, m, d)| StockItem {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        category,
        stock,
        min_level,
        expiry: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        status: derive_stock_status(stock, min_level),
    };
    vec![
        item(1, "Paracetamol 500mg", "PAR500", StockCategory::Tablets, 850, 100, (2025, 6, 15)),
        item(2, "Amoxicillin 250mg", "AMX250", StockCategory::Capsules, 45, 50, (2024, 12, 30)),
        item(3, "Cough Syrup 100ml", "CS100", StockCategory::Syrups, 0, 25, (2025, 3, 20)),
    ]
}

// ============================================================================
// Search / sort / filter
// ============================================================================

impl Searchable for StockItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.sku]
    }
}

impl Sortable for StockItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => compare_text(&self.sku, &other.sku),
            "category" => self.category.label().cmp(other.category.label()),
            "stock" => self.stock.cmp(&other.stock),
            "min_level" => self.min_level.cmp(&other.min_level),
            "expiry" => self.expiry.cmp(&other.expiry),
            "status" => self.status.label().cmp(other.status.label()),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockFilter {
    pub search: String,
    pub category: Option<StockCategory>,
    pub status: Option<StockStatus>,
}

impl ListFilter<StockItem> for StockFilter {
    fn matches(&self, item: &StockItem) -> bool {
        item.matches_search(&self.search)
            && option_matches(&self.category, &item.category)
            && option_matches(&self.status, &item.status)
    }

    fn active_count(&self) -> usize {
        count_active(&self.search, &[self.category.is_some(), self.status.is_some()])
    }
}

// ============================================================================
// Form (DTO)
// ============================================================================

/// Raw add/edit form values, as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockDto {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub stock: String,
    pub min_level: String,
    pub expiry: String,
}

impl StockDto {
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            name: item.name.clone(),
            sku: item.sku.clone(),
            category: item.category.label().to_string(),
            stock: item.stock.to_string(),
            min_level: item.min_level.to_string(),
            expiry: item.expiry.format("%Y-%m-%d").to_string(),
        }
    }

    /// Checks required fields and parses the typed ones.
    pub fn validate(&self) -> Result<(StockCategory, u32, u32, NaiveDate), ValidationError> {
        require_text("Product Name", &self.name)?;
        require_text("SKU", &self.sku)?;
        let category =
            StockCategory::from_label(&self.category).ok_or(ValidationError::Required("Category"))?;
        let stock = parse_count("Current Stock", &self.stock)?;
        let min_level = parse_count("Minimum Level", &self.min_level)?;
        require_text("Expiry Date", &self.expiry)?;
        let expiry = NaiveDate::parse_from_str(self.expiry.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::Required("Expiry Date"))?;
        Ok((category, stock, min_level, expiry))
    }
}

/// Whole, non-negative number typed into a form field.
pub(crate) fn parse_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    require_text(field, raw)?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::Required(field))?;
    require_non_negative(field, value)?;
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange {
            field,
            min: "0".into(),
            max: u32::MAX.to_string(),
        });
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotWholeNumber(field));
    }
    Ok(value as u32)
}

// ============================================================================
// Export
// ============================================================================

impl TabularExport for StockItem {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "sku", "category", "stock", "minLevel", "expiry", "status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.sku.clone(),
            self.category.to_string(),
            self.stock.to_string(),
            self.min_level.to_string(),
            self.expiry.format("%Y-%m-%d").to_string(),
            self.status.to_string(),
        ]
    }

    fn export_stem() -> &'static str {
        "stock_data"
    }
}

impl Printable for StockItem {
    fn print_headers() -> Vec<&'static str> {
        vec!["Product Name", "SKU", "Category", "Stock", "Min Level", "Expiry", "Status"]
    }

    fn print_row(&self) -> Vec<String> {
        let mut row = self.row();
        row.remove(0);
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use crate::shared::list_query::ListQuery;

    fn dto(stock: &str, min_level: &str) -> StockDto {
        StockDto {
            name: "Ibuprofen 400mg".into(),
            sku: "IBU400".into(),
            category: "Tablets".into(),
            stock: stock.into(),
            min_level: min_level.into(),
            expiry: "2026-01-31".into(),
        }
    }

    #[test]
    fn test_derive_stock_status() {
        assert_eq!(derive_stock_status(0, 25), StockStatus::OutOfStock);
        assert_eq!(derive_stock_status(0, 0), StockStatus::OutOfStock);
        assert_eq!(derive_stock_status(45, 50), StockStatus::LowStock);
        assert_eq!(derive_stock_status(50, 50), StockStatus::LowStock);
        assert_eq!(derive_stock_status(51, 50), StockStatus::InStock);
    }

    #[test]
    fn test_demo_set_statuses() {
        let statuses: Vec<_> = demo_set().iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock]
        );
    }

    #[test]
    fn test_new_recomputes_status() {
        let item = StockItem::new(10, &dto("20", "30")).unwrap();
        assert_eq!(item.status, StockStatus::LowStock);

        let mut item = item;
        item.update(&dto("0", "30")).unwrap();
        assert_eq!(item.status, StockStatus::OutOfStock);
        assert_eq!(item.id, 10);
    }

    #[test]
    fn test_validation() {
        let mut bad = dto("10", "5");
        bad.sku = " ".into();
        assert_eq!(StockItem::new(1, &bad), Err(ValidationError::Required("SKU")));
        assert_eq!(
            StockItem::new(1, &dto("-3", "5")),
            Err(ValidationError::Negative("Current Stock"))
        );
        let mut no_category = dto("10", "5");
        no_category.category = String::new();
        assert_eq!(
            StockItem::new(1, &no_category),
            Err(ValidationError::Required("Category"))
        );
    }

    #[test]
    fn test_counts_must_be_whole_numbers() {
        assert_eq!(
            StockItem::new(1, &dto("12.7", "5")),
            Err(ValidationError::NotWholeNumber("Current Stock"))
        );
        assert_eq!(
            StockItem::new(1, &dto("12", "0.5")),
            Err(ValidationError::NotWholeNumber("Minimum Level"))
        );
        let item = StockItem::new(1, &dto(" 12 ", "5.0")).unwrap();
        assert_eq!((item.stock, item.min_level), (12, 5));
        assert_eq!(
            ValidationError::NotWholeNumber("Current Stock").to_string(),
            "Current Stock must be a whole number"
        );
    }

    #[test]
    fn test_filter_by_status_slug_and_category() {
        let items = demo_set();
        let mut query = ListQuery::new(StockFilter::default());
        query.update_filter(|f| f.status = StockStatus::from_label("low-stock"));
        let page = query.apply(&items);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].sku, "AMX250");

        query.reset_filter();
        query.update_filter(|f| f.category = StockCategory::from_label("syrups"));
        assert_eq!(query.apply(&items).rows[0].name, "Cough Syrup 100ml");

        query.reset_filter();
        query.update_filter(|f| f.search = "par5".into());
        assert_eq!(query.apply(&items).total, 1);
    }

    #[test]
    fn test_expiring_soon() {
        let item = &demo_set()[1];
        let today = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        assert!(item.expires_within(today, 90));
        assert!(!item.expires_within(today, 30));
        assert!(!item.is_expired(today));
    }

    #[test]
    fn test_csv_export() {
        let csv = to_csv(&demo_set()[..1]).unwrap();
        assert_eq!(
            csv,
            "id,name,sku,category,stock,minLevel,expiry,status\n1,Paracetamol 500mg,PAR500,Tablets,850,100,2025-06-15,In Stock"
        );
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(&demo_set()[0]).unwrap();
        assert_eq!(json["minLevel"], 100);
        assert_eq!(json["status"], "In Stock");
        assert_eq!(json["expiry"], "2025-06-15");
    }
}
