use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::a001_stock::aggregate::parse_count;
use crate::domain::a003_user::aggregate::ActiveStatus;
use crate::domain::common::{require_email, require_text, AggregateRoot, EntityId, ValidationError};
use crate::shared::export::TabularExport;
use crate::shared::list_query::{
    compare_f64, compare_text, count_active, option_matches, ListFilter, Searchable, Sortable,
};
use crate::shared::print::Printable;

pub const MAX_RATING: f64 = 5.0;

/// Wholesale supplier shown as a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub products_supplied: u32,
    /// 0.0 ..= 5.0
    pub rating: f64,
    pub status: ActiveStatus,
}

impl Supplier {
    pub fn new(id: EntityId, dto: &SupplierDto) -> Result<Self, ValidationError> {
        let (products_supplied, rating, status) = dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            contact_person: dto.contact_person.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            location: dto.location.trim().to_string(),
            products_supplied,
            rating,
            status,
        })
    }

    pub fn update(&mut self, dto: &SupplierDto) -> Result<(), ValidationError> {
        *self = Self::new(self.id, dto)?;
        Ok(())
    }

    /// Filled stars out of five, rounded to the nearest whole star
    pub fn stars(&self) -> usize {
        self.rating.clamp(0.0, MAX_RATING).round() as usize
    }
}

impl AggregateRoot for Supplier {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

pub fn demo_set() -> Vec<Supplier> {
    let supplier = |id, name: &str, contact: &str, email: &str, phone: &str, location: &str, products, rating, status| {
        Supplier {
            id,
            name: name.to_string(),
            contact_person: contact.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            products_supplied: products,
            rating,
            status,
        }
    };
    vec![
        supplier(1, "MediSupply Co.", "Rajesh Kumar", "rajesh@medisupply.in", "+91 98765 43210", "Mumbai, Maharashtra", 145, 4.8, ActiveStatus::Active),
        supplier(2, "PharmaDist Ltd", "Anita Sharma", "anita@pharmadist.in", "+91 98123 45678", "Delhi, NCR", 98, 4.5, ActiveStatus::Active),
        supplier(3, "HealthCare Wholesale", "Vikram Patel", "vikram@hcwholesale.in", "+91 99887 76655", "Ahmedabad, Gujarat", 67, 3.9, ActiveStatus::Inactive),
        supplier(4, "BioMed Traders", "Lakshmi Iyer", "lakshmi@biomedtraders.in", "+91 97654 32109", "Chennai, Tamil Nadu", 112, 4.2, ActiveStatus::Active),
    ]
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.contact_person, &self.email, &self.location]
    }
}

impl Sortable for Supplier {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "contact_person" => compare_text(&self.contact_person, &other.contact_person),
            "location" => compare_text(&self.location, &other.location),
            "products_supplied" => self.products_supplied.cmp(&other.products_supplied),
            "rating" => compare_f64(self.rating, other.rating),
            "status" => self.status.label().cmp(other.status.label()),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    pub search: String,
    pub status: Option<ActiveStatus>,
}

impl ListFilter<Supplier> for SupplierFilter {
    fn matches(&self, item: &Supplier) -> bool {
        item.matches_search(&self.search) && option_matches(&self.status, &item.status)
    }

    fn active_count(&self) -> usize {
        count_active(&self.search, &[self.status.is_some()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub products_supplied: String,
    pub rating: String,
    pub status: String,
}

impl Default for SupplierDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            products_supplied: "0".to_string(),
            rating: "0".to_string(),
            status: ActiveStatus::Active.label().to_string(),
        }
    }
}

impl SupplierDto {
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            contact_person: supplier.contact_person.clone(),
            email: supplier.email.clone(),
            phone: supplier.phone.clone(),
            location: supplier.location.clone(),
            products_supplied: supplier.products_supplied.to_string(),
            rating: supplier.rating.to_string(),
            status: supplier.status.label().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(u32, f64, ActiveStatus), ValidationError> {
        require_text("Supplier Name", &self.name)?;
        require_text("Contact Person", &self.contact_person)?;
        require_email("Email", &self.email)?;
        require_text("Phone", &self.phone)?;
        require_text("Location", &self.location)?;
        let products = parse_count("Products Supplied", &self.products_supplied)?;
        let rating: f64 = self
            .rating
            .trim()
            .parse()
            .map_err(|_| ValidationError::Required("Rating"))?;
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::OutOfRange {
                field: "Rating",
                min: "0".into(),
                max: "5".into(),
            });
        }
        let status =
            ActiveStatus::from_label(&self.status).ok_or(ValidationError::Required("Status"))?;
        Ok((products, rating, status))
    }
}

impl TabularExport for Supplier {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "name",
            "contactPerson",
            "email",
            "phone",
            "location",
            "productsSupplied",
            "rating",
            "status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.contact_person.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.location.clone(),
            self.products_supplied.to_string(),
            format!("{:.1}", self.rating),
            self.status.to_string(),
        ]
    }

    fn export_stem() -> &'static str {
        "suppliers_data"
    }
}

impl Printable for Supplier {
    fn print_headers() -> Vec<&'static str> {
        vec!["Supplier", "Contact", "Email", "Phone", "Location", "Products", "Rating", "Status"]
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

    #[test]
    fn test_search_location_and_contact() {
        let suppliers = demo_set();
        let mut query = ListQuery::new(SupplierFilter::default());
        query.update_filter(|f| f.search = "gujarat".into());
        assert_eq!(query.apply(&suppliers).rows[0].name, "HealthCare Wholesale");
        query.update_filter(|f| f.search = "lakshmi".into());
        assert_eq!(query.apply(&suppliers).total, 1);
    }

    #[test]
    fn test_rating_bounds() {
        let mut dto = SupplierDto::from_supplier(&demo_set()[0]);
        dto.rating = "5.5".into();
        assert!(matches!(
            Supplier::new(9, &dto),
            Err(ValidationError::OutOfRange { field: "Rating", .. })
        ));
        dto.rating = "5".into();
        assert_eq!(Supplier::new(9, &dto).map(|s| s.stars()), Ok(5));
    }

    #[test]
    fn test_stars_round() {
        let suppliers = demo_set();
        assert_eq!(suppliers[2].stars(), 4);
        assert_eq!(suppliers[3].stars(), 4);
    }

    #[test]
    fn test_csv_quotes_locations() {
        let csv = to_csv(&demo_set()[..1]).unwrap();
        assert!(csv.contains("\"Mumbai, Maharashtra\",145,4.8,Active"));
    }
}
