use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Below this viewport width the sidebar overlays the content.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Content panels reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Stock,
    Products,
    Users,
    Suppliers,
    Orders,
    Roles,
    Reports,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Stock,
            Page::Products,
            Page::Users,
            Page::Suppliers,
            Page::Orders,
            Page::Roles,
            Page::Reports,
            Page::Settings,
        ]
    }

    /// Value of `?page=` and of the history state
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Stock => "stock",
            Page::Products => "products",
            Page::Users => "user",
            Page::Suppliers => "supplier",
            Page::Orders => "orders",
            Page::Roles => "roles",
            Page::Reports => "reports",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Stock => "Stock Management",
            Page::Products => "Products",
            Page::Users => "User Management",
            Page::Suppliers => "Suppliers",
            Page::Orders => "Orders Management",
            Page::Roles => "Roles Management",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Stock => "package",
            Page::Products => "pill",
            Page::Users => "users",
            Page::Suppliers => "truck",
            Page::Orders => "shopping-cart",
            Page::Roles => "shield",
            Page::Reports => "bar-chart",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        let key = key.trim();
        Self::all().iter().copied().find(|p| p.key() == key)
    }

    /// Page selected by a query string such as `?page=stock&x=1`
    pub fn from_query(search: &str) -> Option<Page> {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params.get("page").and_then(|key| Page::from_key(key))
    }

    pub fn to_query(&self) -> String {
        let query = serde_qs::to_string(&HistoryState { page: self.key().to_string() })
            .unwrap_or_default();
        format!("?{query}")
    }
}

/// Object kept in `history.state`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    /// Syncs the active page with the URL: the initial `?page=` selects the page,
    /// `popstate` restores it from history state.
    ///
    /// Call once from the layout; the listener is removed when the layout unmounts.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = Page::from_query(&search).unwrap_or_default();
        self.active.set(initial);
        replace_history(initial);

        let this = *self;
        let handle = window_event_listener(leptos::ev::popstate, move |ev| {
            let page = serde_wasm_bindgen::from_value::<HistoryState>(ev.state())
                .ok()
                .and_then(|state| Page::from_key(&state.page))
                .unwrap_or_default();
            log::debug!("popstate -> {}", page.key());
            this.active.set(page);
        });
        on_cleanup(move || handle.remove());
    }

    /// Shows `page` and records a history entry.
    pub fn navigate(&self, page: Page) {
        self.close_left_on_narrow(is_narrow_viewport());
        if self.active.get_untracked() == page {
            return;
        }
        self.active.set(page);
        push_history(page);
        log::info!("Navigated to {}", page.key());
    }

    /// Back to the dashboard after logout.
    pub fn reset(&self) {
        self.active.set(Page::Dashboard);
        replace_history(Page::Dashboard);
    }

    /// Narrow screens hide the sidebar once a page is picked.
    pub fn close_left_on_narrow(&self, narrow: bool) {
        if narrow {
            self.left_open.set(false);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn history_state(page: Page) -> JsValue {
    serde_wasm_bindgen::to_value(&HistoryState {
        page: page.key().to_string(),
    })
    .unwrap_or(JsValue::NULL)
}

fn push_history(page: Page) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&history_state(page), "", Some(&page.to_query()));
    }
}

fn replace_history(page: Page) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&history_state(page), "", Some(&page.to_query()));
    }
}

fn is_narrow_viewport() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w < NARROW_VIEWPORT_PX)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(*page));
        }
        assert_eq!(Page::from_key("user"), Some(Page::Users));
        assert_eq!(Page::from_key("users"), None);
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(Page::from_query("?page=stock"), Some(Page::Stock));
        assert_eq!(Page::from_query("page=supplier&x=1"), Some(Page::Suppliers));
        assert_eq!(Page::from_query("?page=unknown"), None);
        assert_eq!(Page::from_query(""), None);
    }

    #[test]
    fn test_page_to_query() {
        assert_eq!(Page::Orders.to_query(), "?page=orders");
        assert_eq!(Page::from_query(&Page::Roles.to_query()), Some(Page::Roles));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::Stock.title(), "Stock Management");
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn test_narrow_navigation_keeps_sidebar_closed() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.left_open.set(false);
            ctx.close_left_on_narrow(true);
            assert!(!ctx.left_open.get_untracked());

            ctx.left_open.set(true);
            ctx.close_left_on_narrow(true);
            assert!(!ctx.left_open.get_untracked());

            ctx.left_open.set(true);
            ctx.close_left_on_narrow(false);
            assert!(ctx.left_open.get_untracked());
        });
    }
}
