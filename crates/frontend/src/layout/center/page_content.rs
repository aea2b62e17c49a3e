use crate::dashboards::d001_overview::ui::DashboardPage;
use crate::domain::a001_stock::ui::list::StockList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_user::ui::list::UserList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_role::ui::list::RoleList;
use crate::domain::a006_supplier::ui::list::SupplierList;
use crate::domain::a007_report::ui::list::ReportList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::settings::SettingsPage;
use leptos::prelude::*;

/// Renders the panel of the active page; exactly one is mounted at a time.
#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Stock => view! { <StockList /> }.into_any(),
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Users => view! { <UserList /> }.into_any(),
        Page::Suppliers => view! { <SupplierList /> }.into_any(),
        Page::Orders => view! { <OrderList /> }.into_any(),
        Page::Roles => view! { <RoleList /> }.into_any(),
        Page::Reports => view! { <ReportList /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
