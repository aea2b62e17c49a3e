use chrono::NaiveDate;

use crate::domain::a001_stock::aggregate::{StockItem, StockStatus};
use crate::domain::a003_user::aggregate::Employee;
use crate::domain::a004_order::aggregate::{Order, OrderStatus};
use crate::shared::format::format_inr;
use crate::shared::notification::NotificationKind;

/// Items expiring within this many days are listed as "expiring soon"
pub const EXPIRY_WINDOW_DAYS: i64 = 90;

/// Orders shown in the recent orders panel
pub const RECENT_ORDERS: usize = 5;

/// Stat-card counter animation length
pub const COUNTER_ANIMATION_MS: u32 = 2000;

/// One stat card on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: f64,
    pub is_currency: bool,
    pub icon: &'static str,
    /// Accent colour of the left border
    pub accent: &'static str,
}

impl StatCard {
    pub fn display_value(&self) -> String {
        render_value(self.value, self.is_currency)
    }

    /// Counter text part-way through the animation, `progress` in `0.0..=1.0`
    pub fn frame(&self, progress: f64) -> String {
        render_value(counter_value(self.value, progress), self.is_currency)
    }

    /// Toast raised when the card is clicked
    pub fn click_message(&self) -> String {
        format!("{}: {} - Click for detailed view", self.title, self.display_value())
    }
}

fn render_value(value: f64, is_currency: bool) -> String {
    if is_currency {
        format_inr(value)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Swing easing: slow start, fast middle, slow finish. Rounded up like the counter text.
pub fn counter_value(target: f64, progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    let eased = 0.5 - (p * std::f64::consts::PI).cos() / 2.0;
    (target * eased).ceil().min(target.max(0.0))
}

/// Everything the dashboard page renders, computed from the stores
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub cards: Vec<StatCard>,
    pub recent_orders: Vec<Order>,
    pub expiring_soon: Vec<StockItem>,
    pub stock_alerts: Vec<StockItem>,
}

impl DashboardSnapshot {
    pub fn compute(
        stock: &[StockItem],
        orders: &[Order],
        users: &[Employee],
        today: NaiveDate,
    ) -> Self {
        let low = stock.iter().filter(|s| s.status == StockStatus::LowStock).count();
        let out = stock.iter().filter(|s| s.status == StockStatus::OutOfStock).count();
        let pending = orders.iter().filter(|o| o.status == OrderStatus::Pending).count();
        let revenue: f64 = orders.iter().map(|o| o.total).sum();
        let active_users = users.iter().filter(|u| u.status.is_active()).count();

        let card = |title, value: usize, icon, accent| StatCard {
            title,
            value: value as f64,
            is_currency: false,
            icon,
            accent,
        };
        let cards = vec![
            card("Total Products", stock.len(), "package", "#4f46e5"),
            card("Low Stock Items", low, "alert-triangle", "#f59e0b"),
            card("Out of Stock", out, "x-circle", "#ef4444"),
            card("Pending Orders", pending, "shopping-cart", "#3b82f6"),
            StatCard {
                title: "Total Revenue",
                value: revenue,
                is_currency: true,
                icon: "trending-up",
                accent: "#10b981",
            },
            card("Active Users", active_users, "users", "#8b5cf6"),
        ];

        let mut recent_orders = orders.to_vec();
        recent_orders.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        recent_orders.truncate(RECENT_ORDERS);

        let mut expiring_soon: Vec<StockItem> = stock
            .iter()
            .filter(|s| s.expires_within(today, EXPIRY_WINDOW_DAYS))
            .cloned()
            .collect();
        expiring_soon.sort_by_key(|s| s.expiry);

        let stock_alerts = stock.iter().filter(|s| s.needs_reorder()).cloned().collect();

        Self {
            cards,
            recent_orders,
            expiring_soon,
            stock_alerts,
        }
    }
}

/// Entry in the header bell dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAlert {
    pub message: &'static str,
    pub kind: NotificationKind,
    pub time: &'static str,
}

/// Summary toast shown when the bell is clicked
pub const BELL_SUMMARY: &str = "You have 3 new notifications";

pub fn header_alerts() -> Vec<HeaderAlert> {
    vec![
        HeaderAlert {
            message: "15 items expiring soon",
            kind: NotificationKind::Warning,
            time: "2 hours ago",
        },
        HeaderAlert {
            message: "28 items low in stock",
            kind: NotificationKind::Error,
            time: "4 hours ago",
        },
        HeaderAlert {
            message: "7 new orders received",
            kind: NotificationKind::Info,
            time: "6 hours ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_stock, a003_user, a004_order};

    fn snapshot(today: NaiveDate) -> DashboardSnapshot {
        DashboardSnapshot::compute(
            &a001_stock::aggregate::demo_set(),
            &a004_order::aggregate::demo_set(),
            &a003_user::aggregate::demo_set(),
            today,
        )
    }

    #[test]
    fn test_cards_from_demo_data() {
        let snap = snapshot(NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        let values: Vec<String> = snap.cards.iter().map(StatCard::display_value).collect();
        assert_eq!(values, vec!["3", "1", "1", "1", "₹60,150", "2"]);
        assert_eq!(
            snap.cards[4].click_message(),
            "Total Revenue: ₹60,150 - Click for detailed view"
        );
    }

    #[test]
    fn test_lists() {
        let snap = snapshot(NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(snap.recent_orders[0].order_number, "#ORD-2024-001");
        assert_eq!(snap.expiring_soon.len(), 1);
        assert_eq!(snap.expiring_soon[0].sku, "AMX250");
        assert_eq!(snap.stock_alerts.len(), 2);
    }

    #[test]
    fn test_counter_animation() {
        assert_eq!(counter_value(120.0, 0.0), 0.0);
        assert_eq!(counter_value(120.0, 0.5), 60.0);
        assert_eq!(counter_value(120.0, 1.0), 120.0);
        assert_eq!(counter_value(120.0, 7.0), 120.0);
        let card = StatCard {
            title: "Total Revenue",
            value: 60150.0,
            is_currency: true,
            icon: "trending-up",
            accent: "#10b981",
        };
        assert_eq!(card.frame(1.0), "₹60,150");
    }

    #[test]
    fn test_header_alerts() {
        assert_eq!(header_alerts().len(), 3);
        assert_eq!(BELL_SUMMARY, "You have 3 new notifications");
    }
}
