use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_stock::aggregate::StockItem;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::a003_user::aggregate::Employee;
use crate::domain::a004_order::aggregate::Order;
use crate::domain::a005_role::aggregate::Role;
use crate::domain::a006_supplier::aggregate::Supplier;
use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::export::ExportFormat;
use crate::shared::list_query::{compare_text, Searchable, Sortable};

crate::label_enum! {
    /// Which store a report is built from
    pub enum ReportKind {
        Stock => "Stock",
        Sales => "Sales",
        Users => "Users",
        Roles => "Roles",
        Suppliers => "Suppliers",
    }
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Stock => "Stock Summary",
            ReportKind::Sales => "Sales Report",
            ReportKind::Users => "User Activity",
            ReportKind::Roles => "Role Assignments",
            ReportKind::Suppliers => "Supplier Performance",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ReportKind::Stock => "package",
            ReportKind::Sales => "trending-up",
            ReportKind::Users => "users",
            ReportKind::Roles => "shield",
            ReportKind::Suppliers => "truck",
        }
    }
}

crate::label_enum! {
    pub enum ReportFormat {
        Csv => "CSV",
        Json => "JSON",
    }
}

impl From<ReportFormat> for ExportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Csv => ExportFormat::Csv,
            ReportFormat::Json => ExportFormat::Json,
        }
    }
}

/// Catalog entry on the reports page; the data is rendered from the live store on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: EntityId,
    pub name: String,
    pub kind: ReportKind,
    pub generated_on: NaiveDate,
    pub format: ReportFormat,
}

impl Report {
    /// `Sales Report - Jan 2024`
    pub fn generate(id: EntityId, kind: ReportKind, format: ReportFormat, today: NaiveDate) -> Self {
        Self {
            id,
            name: format!("{} - {}", kind.title(), today.format("%b %Y")),
            kind,
            generated_on: today,
            format,
        }
    }

    pub fn file_stem(&self) -> String {
        let date = self.generated_on.format("%Y%m%d");
        format!("{}_report_{date}", self.kind.slug())
    }
}

impl AggregateRoot for Report {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "reports"
    }

    fn element_name() -> &'static str {
        "Report"
    }

    fn list_name() -> &'static str {
        "Reports"
    }
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.kind.label(), self.format.label()]
    }
}

impl Sortable for Report {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "kind" => self.kind.label().cmp(other.kind.label()),
            "generated_on" => self.generated_on.cmp(&other.generated_on),
            "format" => self.format.label().cmp(other.format.label()),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

pub fn demo_set() -> Vec<Report> {
    let report = |id, kind, format, (y, m, d)| {
        Report::generate(id, kind, format, NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
    };
    vec![
        report(1, ReportKind::Stock, ReportFormat::Csv, (2024, 1, 15)),
        report(2, ReportKind::Sales, ReportFormat::Csv, (2024, 1, 14)),
        report(3, ReportKind::Users, ReportFormat::Json, (2024, 1, 12)),
        report(4, ReportKind::Suppliers, ReportFormat::Csv, (2024, 1, 10)),
    ]
}

/// Everything in the stores, written by "Export All"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBundle {
    pub exported_at: String,
    pub stock: Vec<StockItem>,
    pub products: Vec<Product>,
    pub users: Vec<Employee>,
    pub orders: Vec<Order>,
    pub roles: Vec<Role>,
    pub suppliers: Vec<Supplier>,
    pub reports: Vec<Report>,
}

pub const BUNDLE_FILENAME: &str = "pharma_connect_export.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_names_report() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let report = Report::generate(5, ReportKind::Sales, ReportFormat::Json, today);
        assert_eq!(report.name, "Sales Report - Mar 2024");
        assert_eq!(report.file_stem(), "sales_report_20240309");
        assert_eq!(ExportFormat::from(report.format), ExportFormat::Json);
    }

    #[test]
    fn test_bundle_shape() {
        let bundle = DataBundle {
            exported_at: "2024-01-15T10:00:00Z".into(),
            stock: crate::domain::a001_stock::aggregate::demo_set(),
            products: Vec::new(),
            users: Vec::new(),
            orders: crate::domain::a004_order::aggregate::demo_set(),
            roles: Vec::new(),
            suppliers: Vec::new(),
            reports: demo_set(),
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["stock"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["orders"][0]["orderId"], "#ORD-2024-001");
        assert_eq!(json["reports"][0]["generatedOn"], "2024-01-15");
        assert_eq!(json["exportedAt"], "2024-01-15T10:00:00Z");
    }
}
