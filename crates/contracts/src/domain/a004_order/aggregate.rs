use std::cmp::Ordering;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::a001_stock::aggregate::parse_count;
use crate::domain::a002_product::aggregate::parse_amount;
use crate::domain::common::{require_email, require_text, AggregateRoot, EntityId, ValidationError};
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
    pub enum OrderStatus {
        Pending => "Pending",
        Processing => "Processing",
        Shipped => "Shipped",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
}

impl OrderStatus {
    pub fn badge_color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "warning",
            OrderStatus::Processing => "brand",
            OrderStatus::Shipped => "informative",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled => "danger",
        }
    }
}

crate::label_enum! {
    pub enum OrderPriority {
        Urgent => "Urgent",
        High => "High",
        Normal => "Normal",
        Low => "Low",
    }
}

impl OrderPriority {
    pub fn badge_color(&self) -> &'static str {
        match self {
            OrderPriority::Urgent => "danger",
            OrderPriority::High => "warning",
            OrderPriority::Normal => "informative",
            OrderPriority::Low => "subtle",
        }
    }

    /// Sort rank, most urgent first
    fn rank(&self) -> u8 {
        match self {
            OrderPriority::Urgent => 0,
            OrderPriority::High => 1,
            OrderPriority::Normal => 2,
            OrderPriority::Low => 3,
        }
    }
}

crate::label_enum! {
    /// Order date filter, relative to today
    pub enum DateRange {
        Today => "today",
        Week => "week",
        Month => "month",
    }
}

impl DateRange {
    pub fn caption(&self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
        }
    }

    /// `week` covers the last 7 days, `month` the last 30.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateRange::Today => date == today,
            DateRange::Week => date >= today - Duration::days(7),
            DateRange::Month => date >= today - Duration::days(30),
        }
    }
}

/// `#ORD-2024-004` for the fourth order of 2024
pub fn next_order_number(year: i32, existing_count: usize) -> String {
    format!("#ORD-{}-{:03}", year, existing_count + 1)
}

pub const CARRIER: &str = "FastDelivery Express";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer order placed by a clinic or hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    #[serde(rename = "orderId")]
    pub order_number: String,
    pub customer: String,
    pub email: String,
    /// Number of line items
    pub products: u32,
    /// INR
    pub total: f64,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub date: NaiveDate,
}

impl Order {
    /// A new order is numbered after the orders already in the store and dated today.
    pub fn new(
        id: EntityId,
        dto: &OrderDto,
        today: NaiveDate,
        existing_count: usize,
    ) -> Result<Self, ValidationError> {
        let (products, total, status, priority) = dto.validate()?;
        Ok(Self {
            id,
            order_number: next_order_number(today.year(), existing_count),
            customer: dto.customer.trim().to_string(),
            email: dto.email.trim().to_string(),
            products,
            total,
            status,
            priority,
            date: today,
        })
    }

    /// Order number and date are kept.
    pub fn update(&mut self, dto: &OrderDto) -> Result<(), ValidationError> {
        let (products, total, status, priority) = dto.validate()?;
        self.customer = dto.customer.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.products = products;
        self.total = total;
        self.status = status;
        self.priority = priority;
        Ok(())
    }

    pub fn can_approve(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    pub fn approve(&mut self) {
        self.status = OrderStatus::Processing;
    }

    pub fn total_display(&self) -> String {
        format_inr(self.total)
    }

    /// Tracking timeline shown by the track action.
    ///
    /// `now_millis` only feeds the last four digits of the tracking number.
    pub fn tracking(&self, now_millis: i64) -> OrderTracking {
        let date = self.date.format("%Y-%m-%d").to_string();
        let step = |title: &'static str, when: String, done| TrackingStep { title, when, done };
        OrderTracking {
            order_number: self.order_number.clone(),
            steps: vec![
                step("Order Confirmed", format!("{date} 10:00 AM"), true),
                step("Processing", format!("{date} 11:30 AM"), true),
                step("Shipped", format!("{date} 2:15 PM"), true),
                step("Out for Delivery", "Expected today by 6:00 PM".to_string(), false),
            ],
            tracking_number: format!("TRK{}{:04}", self.id, now_millis.rem_euclid(10_000)),
            carrier: CARRIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingStep {
    pub title: &'static str,
    pub when: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTracking {
    pub order_number: String,
    pub steps: Vec<TrackingStep>,
    pub tracking_number: String,
    pub carrier: &'static str,
}

impl AggregateRoot for Order {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.order_number
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

pub fn demo_set() -> Vec<Order> {
    let order = |id, number: &str, customer: &str, email: &str, products, total, status, priority, day| Order {
        id,
        order_number: number.to_string(),
        customer: customer.to_string(),
        email: email.to_string(),
        products,
        total,
        status,
        priority,
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
    };
    vec![
        order(1, "#ORD-2024-001", "Apollo Clinic", "apollo@clinic.com", 5, 12450.0, OrderStatus::Pending, OrderPriority::Urgent, 15),
        order(2, "#ORD-2024-002", "Metro Hospital", "orders@metro.com", 12, 28950.0, OrderStatus::Shipped, OrderPriority::High, 14),
        order(3, "#ORD-2024-003", "City Medical", "supply@citymed.com", 8, 18750.0, OrderStatus::Processing, OrderPriority::Normal, 13),
    ]
}

// ============================================================================
// Search / sort / filter
// ============================================================================

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.order_number, &self.customer, &self.email]
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer" => compare_text(&self.customer, &other.customer),
            "products" => self.products.cmp(&other.products),
            "total" => compare_f64(self.total, other.total),
            "status" => self.status.label().cmp(other.status.label()),
            "priority" => self.priority.rank().cmp(&other.priority.rank()),
            "date" => self.date.cmp(&other.date),
            _ => self.order_number.cmp(&other.order_number),
        }
    }
}

/// `today` anchors the date range; the page refreshes it on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: String,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,
    pub date_range: Option<DateRange>,
    pub today: NaiveDate,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            priority: None,
            date_range: None,
            today: chrono::Local::now().date_naive(),
        }
    }
}

impl OrderFilter {
    pub fn as_of(today: NaiveDate) -> Self {
        Self {
            today,
            ..Self::default()
        }
    }
}

impl ListFilter<Order> for OrderFilter {
    fn matches(&self, item: &Order) -> bool {
        item.matches_search(&self.search)
            && option_matches(&self.status, &item.status)
            && option_matches(&self.priority, &item.priority)
            && self
                .date_range
                .map_or(true, |range| range.contains(item.date, self.today))
    }

    fn active_count(&self) -> usize {
        count_active(
            &self.search,
            &[
                self.status.is_some(),
                self.priority.is_some(),
                self.date_range.is_some(),
            ],
        )
    }
}

// ============================================================================
// Form (DTO)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    pub customer: String,
    pub email: String,
    pub products: String,
    pub total: String,
    pub priority: String,
    pub status: String,
}

impl Default for OrderDto {
    fn default() -> Self {
        Self {
            customer: String::new(),
            email: String::new(),
            products: String::new(),
            total: String::new(),
            priority: OrderPriority::Normal.label().to_string(),
            status: OrderStatus::Pending.label().to_string(),
        }
    }
}

impl OrderDto {
    pub fn from_order(order: &Order) -> Self {
        Self {
            customer: order.customer.clone(),
            email: order.email.clone(),
            products: order.products.to_string(),
            total: order.total.to_string(),
            priority: order.priority.label().to_string(),
            status: order.status.label().to_string(),
        }
    }

    /// Orders carry at least one product.
    pub fn validate(&self) -> Result<(u32, f64, OrderStatus, OrderPriority), ValidationError> {
        require_text("Customer Name", &self.customer)?;
        require_email("Customer Email", &self.email)?;
        let products = parse_count("Number of Products", &self.products)?;
        if products == 0 {
            return Err(ValidationError::OutOfRange {
                field: "Number of Products",
                min: "1".into(),
                max: u32::MAX.to_string(),
            });
        }
        let total = parse_amount("Total Amount", &self.total)?;
        let status =
            OrderStatus::from_label(&self.status).ok_or(ValidationError::Required("Status"))?;
        let priority =
            OrderPriority::from_label(&self.priority).ok_or(ValidationError::Required("Priority"))?;
        Ok((products, total, status, priority))
    }
}

// ============================================================================
// Export
// ============================================================================

impl TabularExport for Order {
    fn headers() -> Vec<&'static str> {
        vec!["id", "orderId", "customer", "email", "products", "total", "status", "priority", "date"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.order_number.clone(),
            self.customer.clone(),
            self.email.clone(),
            self.products.to_string(),
            self.total.to_string(),
            self.status.to_string(),
            self.priority.to_string(),
            self.date.format("%Y-%m-%d").to_string(),
        ]
    }

    fn export_stem() -> &'static str {
        "orders_data"
    }
}

impl Printable for Order {
    fn print_headers() -> Vec<&'static str> {
        vec!["Order ID", "Customer", "Email", "Products", "Total", "Status", "Priority", "Date"]
    }

    fn print_row(&self) -> Vec<String> {
        vec![
            self.order_number.clone(),
            self.customer.clone(),
            self.email.clone(),
            self.products.to_string(),
            self.total_display(),
            self.status.to_string(),
            self.priority.to_string(),
            self.date.format("%Y-%m-%d").to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use crate::shared::list_query::ListQuery;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form() -> OrderDto {
        OrderDto {
            customer: "Sunrise Pharmacy".into(),
            email: "orders@sunrise.in".into(),
            products: "3".into(),
            total: "4500.50".into(),
            ..OrderDto::default()
        }
    }

    #[test]
    fn test_next_order_number() {
        assert_eq!(next_order_number(2024, 3), "#ORD-2024-004");
        assert_eq!(next_order_number(2025, 0), "#ORD-2025-001");
        assert_eq!(next_order_number(2025, 1234), "#ORD-2025-1235");
    }

    #[test]
    fn test_new_order_numbered_and_dated() {
        let today = day(2024, 2, 1);
        let order = Order::new(77, &form(), today, 3).unwrap();
        assert_eq!(order.order_number, "#ORD-2024-004");
        assert_eq!(order.date, today);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.priority, OrderPriority::Normal);
        assert_eq!(order.total, 4500.5);
    }

    #[test]
    fn test_zero_products_rejected() {
        let mut dto = form();
        dto.products = "0".into();
        assert!(matches!(
            Order::new(1, &dto, day(2024, 1, 1), 0),
            Err(ValidationError::OutOfRange { field: "Number of Products", .. })
        ));
    }

    #[test]
    fn test_update_keeps_number_and_date() {
        let mut order = demo_set().remove(1);
        let mut dto = OrderDto::from_order(&order);
        dto.status = "Delivered".into();
        order.update(&dto).unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.order_number, "#ORD-2024-002");
        assert_eq!(order.date, day(2024, 1, 14));
    }

    #[test]
    fn test_approve() {
        let mut order = demo_set().remove(0);
        assert!(order.can_approve());
        order.approve();
        assert_eq!(order.status, OrderStatus::Processing);
        assert!(!order.can_approve());
    }

    #[test]
    fn test_tracking() {
        let order = &demo_set()[0];
        let tracking = order.tracking(1_705_312_345_678);
        assert_eq!(tracking.tracking_number, "TRK15678");
        assert_eq!(tracking.carrier, "FastDelivery Express");
        assert_eq!(tracking.steps.len(), 4);
        assert_eq!(tracking.steps[0].when, "2024-01-15 10:00 AM");
        assert!(!tracking.steps[3].done);
        assert_eq!(order.tracking(42).tracking_number, "TRK10042");
    }

    #[test]
    fn test_date_ranges() {
        let today = day(2024, 1, 15);
        assert!(DateRange::Today.contains(today, today));
        assert!(!DateRange::Today.contains(day(2024, 1, 14), today));
        assert!(DateRange::Week.contains(day(2024, 1, 8), today));
        assert!(!DateRange::Week.contains(day(2024, 1, 7), today));
        assert!(DateRange::Month.contains(day(2023, 12, 16), today));
        assert!(!DateRange::Month.contains(day(2023, 12, 15), today));
    }

    #[test]
    fn test_filter_orders() {
        let orders = demo_set();
        let mut query = ListQuery::new(OrderFilter::as_of(day(2024, 1, 15)));
        query.update_filter(|f| f.date_range = DateRange::from_label("today"));
        assert_eq!(query.apply(&orders).total, 1);

        query.update_filter(|f| {
            f.date_range = Some(DateRange::Week);
            f.priority = OrderPriority::from_label("high");
        });
        let page = query.apply(&orders);
        assert_eq!(page.rows[0].customer, "Metro Hospital");

        query.reset_filter();
        query.update_filter(|f| f.search = "ORD-2024-003".into());
        assert_eq!(query.apply(&orders).rows[0].customer, "City Medical");
    }

    #[test]
    fn test_sort_by_priority_and_total() {
        let orders = demo_set();
        let mut query = ListQuery::new(OrderFilter::as_of(day(2024, 1, 15)));
        query.toggle_sort("total");
        query.toggle_sort("total");
        assert_eq!(query.apply(&orders).rows[0].customer, "Metro Hospital");
        query.toggle_sort("priority");
        assert_eq!(query.apply(&orders).rows[0].priority, OrderPriority::Urgent);
    }

    #[test]
    fn test_export_uses_order_id_key() {
        let csv = to_csv(&demo_set()[..1]).unwrap();
        assert!(csv.starts_with("id,orderId,customer"));
        assert!(csv.contains("#ORD-2024-001,Apollo Clinic,apollo@clinic.com,5,12450,Pending,Urgent,2024-01-15"));
        let json = serde_json::to_value(&demo_set()[0]).unwrap();
        assert_eq!(json["orderId"], "#ORD-2024-001");
        assert_eq!(demo_set()[0].print_row()[4], "₹12,450");
    }
}
