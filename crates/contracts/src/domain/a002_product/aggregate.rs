use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::a001_stock::aggregate::parse_count;
use crate::domain::common::{
    require_non_negative, require_text, AggregateRoot, EntityId, ValidationError,
};
use crate::shared::export::TabularExport;
use crate::shared::format::format_inr;
use crate::shared::list_query::{
    compare_f64, compare_text, count_active, option_matches, ListFilter, Searchable, Sortable,
};
use crate::shared::print::Printable;

// ============================================================================
// Enums
// ============================================================================

crate::label_enum! {
    /// Therapeutic group shown on the product card
    pub enum ProductCategory {
        PainRelief => "Pain Relief",
        Antibiotics => "Antibiotics",
        Cardiovascular => "Cardiovascular",
        Diabetes => "Diabetes",
        Vitamins => "Vitamins",
    }
}

crate::label_enum! {
    pub enum ProductStatus {
        Active => "Active",
        Inactive => "Inactive",
        Discontinued => "Discontinued",
    }
}

impl ProductStatus {
    pub fn badge_color(&self) -> &'static str {
        match self {
            ProductStatus::Active => "success",
            ProductStatus::Inactive => "warning",
            ProductStatus::Discontinued => "danger",
        }
    }
}

crate::label_enum! {
    /// Price filter buckets; bounds are inclusive on both ends
    pub enum PriceRange {
        UpTo50 => "0-50",
        From50To200 => "50-200",
        From200To500 => "200-500",
        Above500 => "500+",
    }
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceRange::UpTo50 => price <= 50.0,
            PriceRange::From50To200 => (50.0..=200.0).contains(&price),
            PriceRange::From200To500 => (200.0..=500.0).contains(&price),
            PriceRange::Above500 => price >= 500.0,
        }
    }

    /// Option text in the filter `<select>`
    pub fn caption(&self) -> &'static str {
        match self {
            PriceRange::UpTo50 => "₹0 - ₹50",
            PriceRange::From50To200 => "₹50 - ₹200",
            PriceRange::From200To500 => "₹200 - ₹500",
            PriceRange::Above500 => "₹500+",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub manufacturer: String,
    /// INR
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

impl Product {
    pub fn new(id: EntityId, dto: &ProductDto) -> Result<Self, ValidationError> {
        let (category, price, stock, status) = dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            sku: dto.sku.trim().to_string(),
            category,
            manufacturer: dto.manufacturer.trim().to_string(),
            price,
            stock,
            status,
        })
    }

    pub fn update(&mut self, dto: &ProductDto) -> Result<(), ValidationError> {
        *self = Self::new(self.id, dto)?;
        Ok(())
    }

    pub fn price_display(&self) -> String {
        format_inr(self.price)
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

pub fn demo_set() -> Vec<Product> {
    let product = |id, name: &str, sku: &str, category, manufacturer: &str, price, stock, status| Product {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        category,
        manufacturer: manufacturer.to_string(),
        price,
        stock,
        status,
    };
    use ProductCategory::*;
    vec![
        product(1, "Paracetamol 500mg", "PAR500", PainRelief, "Cipla Ltd", 25.0, 850, ProductStatus::Active),
        product(2, "Amoxicillin 250mg", "AMX250", Antibiotics, "Sun Pharma", 120.0, 45, ProductStatus::Active),
        product(3, "Atorvastatin 10mg", "ATV010", Cardiovascular, "Dr. Reddy's", 185.0, 320, ProductStatus::Active),
        product(4, "Insulin Glargine", "INS100", Diabetes, "Biocon", 750.0, 60, ProductStatus::Inactive),
        product(5, "Vitamin D3 1000IU", "VTD1000", Vitamins, "Mankind Pharma", 45.0, 0, ProductStatus::Discontinued),
        product(6, "Metformin 500mg", "MET500", Diabetes, "Lupin", 60.0, 540, ProductStatus::Active),
    ]
}

// ============================================================================
// Search / sort / filter
// ============================================================================

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.sku, &self.manufacturer, self.category.label()]
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => compare_text(&self.sku, &other.sku),
            "category" => self.category.label().cmp(other.category.label()),
            "manufacturer" => compare_text(&self.manufacturer, &other.manufacturer),
            "price" => compare_f64(self.price, other.price),
            "stock" => self.stock.cmp(&other.stock),
            "status" => self.status.label().cmp(other.status.label()),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<ProductCategory>,
    pub status: Option<ProductStatus>,
    pub price: Option<PriceRange>,
}

impl ListFilter<Product> for ProductFilter {
    fn matches(&self, item: &Product) -> bool {
        item.matches_search(&self.search)
            && option_matches(&self.category, &item.category)
            && option_matches(&self.status, &item.status)
            && self.price.map_or(true, |range| range.contains(item.price))
    }

    fn active_count(&self) -> usize {
        count_active(
            &self.search,
            &[self.category.is_some(), self.status.is_some(), self.price.is_some()],
        )
    }
}

// ============================================================================
// Form (DTO)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub manufacturer: String,
    pub price: String,
    pub stock: String,
    pub status: String,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            category: String::new(),
            manufacturer: String::new(),
            price: String::new(),
            stock: String::new(),
            status: ProductStatus::Active.label().to_string(),
        }
    }
}

impl ProductDto {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.label().to_string(),
            manufacturer: product.manufacturer.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            status: product.status.label().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(ProductCategory, f64, u32, ProductStatus), ValidationError> {
        require_text("Product Name", &self.name)?;
        require_text("SKU", &self.sku)?;
        let category = ProductCategory::from_label(&self.category)
            .ok_or(ValidationError::Required("Category"))?;
        require_text("Manufacturer", &self.manufacturer)?;
        let price = parse_amount("Price", &self.price)?;
        let stock = parse_count("Stock", &self.stock)?;
        let status =
            ProductStatus::from_label(&self.status).ok_or(ValidationError::Required("Status"))?;
        Ok((category, price, stock, status))
    }
}

/// Non-negative money amount typed into a form field.
pub(crate) fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    require_text(field, raw)?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::Required(field))?;
    require_non_negative(field, value)?;
    Ok(value)
}

// ============================================================================
// Export
// ============================================================================

impl TabularExport for Product {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "sku", "category", "manufacturer", "price", "stock", "status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.sku.clone(),
            self.category.to_string(),
            self.manufacturer.clone(),
            self.price.to_string(),
            self.stock.to_string(),
            self.status.to_string(),
        ]
    }

    fn export_stem() -> &'static str {
        "products_data"
    }
}

impl Printable for Product {
    fn print_headers() -> Vec<&'static str> {
        vec!["Product Name", "SKU", "Category", "Manufacturer", "Price", "Stock", "Status"]
    }

    fn print_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.sku.clone(),
            self.category.to_string(),
            self.manufacturer.clone(),
            self.price_display(),
            self.stock.to_string(),
            self.status.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ListQuery;

    #[test]
    fn test_price_buckets_are_inclusive() {
        assert!(PriceRange::UpTo50.contains(50.0));
        assert!(PriceRange::From50To200.contains(50.0));
        assert!(PriceRange::From50To200.contains(200.0));
        assert!(!PriceRange::From50To200.contains(201.0));
        assert!(PriceRange::From200To500.contains(500.0));
        assert!(PriceRange::Above500.contains(500.0));
        assert!(!PriceRange::Above500.contains(499.0));
        assert_eq!(PriceRange::from_label("500+"), Some(PriceRange::Above500));
    }

    #[test]
    fn test_filter_combines_all_controls() {
        let products = demo_set();
        let mut query = ListQuery::new(ProductFilter::default());
        query.update_filter(|f| f.price = Some(PriceRange::From50To200));
        let names: Vec<_> = query.apply(&products).rows.into_iter().map(|p| p.sku).collect();
        assert_eq!(names, vec!["AMX250", "ATV010", "MET500"]);

        query.update_filter(|f| f.category = ProductCategory::from_label("diabetes"));
        assert_eq!(query.apply(&products).total, 1);

        query.reset_filter();
        query.update_filter(|f| f.search = "sun pharma".into());
        assert_eq!(query.apply(&products).rows[0].name, "Amoxicillin 250mg");
        assert_eq!(query.filter.active_count(), 1);
    }

    #[test]
    fn test_search_covers_category() {
        let products = demo_set();
        assert!(products[2].matches_search("cardio"));
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = ProductDto::from_product(&demo_set()[0]);
        assert!(Product::new(9, &dto).is_ok());
        dto.price = "-1".into();
        assert_eq!(Product::new(9, &dto), Err(ValidationError::Negative("Price")));
        dto.price = "10".into();
        dto.manufacturer = "".into();
        assert_eq!(Product::new(9, &dto), Err(ValidationError::Required("Manufacturer")));
    }

    #[test]
    fn test_print_row_formats_price() {
        assert_eq!(demo_set()[3].print_row()[4], "₹750");
    }
}
