use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::stores::use_stores;
use contracts::dashboards::d001_overview::dto::{DashboardSnapshot, COUNTER_ANIMATION_MS};
use contracts::shared::notification::NotificationKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Counter animation tick, roughly one frame
const FRAME_MS: u32 = 16;

/// Drives `progress` from 0 to 1 over the counter animation.
/// Stops early once the page is unmounted and the signal is gone.
fn animate_counters(progress: RwSignal<f64>) {
    let steps = (COUNTER_ANIMATION_MS / FRAME_MS).max(1);
    spawn_local(async move {
        for step in 1..=steps {
            TimeoutFuture::new(FRAME_MS).await;
            if progress.try_set(f64::from(step) / f64::from(steps)).is_some() {
                break;
            }
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let snapshot = Memo::new(move |_| {
        let stock = stores.stock.all();
        let orders = stores.orders.all();
        let users = stores.users.all();
        DashboardSnapshot::compute(&stock, &orders, &users, today())
    });

    let progress = RwSignal::new(0.0_f64);
    animate_counters(progress);

    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Overview of stock, orders and users" >
                <span class="page__date">{format_date(today())}</span>
            </PageHeader>

            <div class="stat-grid">
                {move || {
                    snapshot
                        .get()
                        .cards
                        .into_iter()
                        .map(|card| {
                            let text = {
                                let card = card.clone();
                                Signal::derive(move || card.frame(progress.get()))
                            };
                            let message = card.click_message();
                            view! {
                                <StatCard
                                    card=card
                                    text=text
                                    on_click=Callback::new(move |_| {
                                        toasts.notify(message.clone(), NotificationKind::Info)
                                    })
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="dashboard-grid">
                <CardAnimated delay_ms=0 class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>{icon("shopping-cart")} " Recent Orders"</h3>
                        <button class="link-button" on:click=move |_| ctx.navigate(Page::Orders)>
                            "View all"
                        </button>
                    </div>
                    <ul class="dashboard-list">
                        {move || {
                            snapshot
                                .get()
                                .recent_orders
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <li class="dashboard-list__item">
                                            <div>
                                                <div class="dashboard-list__title">{order.order_number.clone()}</div>
                                                <div class="dashboard-list__meta">{order.customer.clone()}</div>
                                            </div>
                                            <div class="dashboard-list__side">
                                                <span>{order.total_display()}</span>
                                                <StatusBadge color=order.status.badge_color() label=order.status.label() />
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </CardAnimated>

                <CardAnimated delay_ms=80 class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>{icon("clock")} " Expiring Soon"</h3>
                    </div>
                    <ul class="dashboard-list">
                        {move || {
                            let today = today();
                            let items = snapshot.get().expiring_soon;
                            if items.is_empty() {
                                return view! {
                                    <li class="dashboard-list__empty">"Nothing expires in the next 90 days"</li>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|item| {
                                    let expired = item.is_expired(today);
                                    view! {
                                        <li class="dashboard-list__item">
                                            <div>
                                                <div class="dashboard-list__title">{item.name.clone()}</div>
                                                <div class="dashboard-list__meta">{item.sku.clone()}</div>
                                            </div>
                                            <span class="dashboard-list__side" class:text-danger=expired>
                                                {format_date(item.expiry)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>
                </CardAnimated>

                <CardAnimated delay_ms=160 class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <h3>{icon("alert-triangle")} " Stock Alerts"</h3>
                        <button class="link-button" on:click=move |_| ctx.navigate(Page::Stock)>
                            "Manage stock"
                        </button>
                    </div>
                    <ul class="dashboard-list">
                        {move || {
                            snapshot
                                .get()
                                .stock_alerts
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li class="dashboard-list__item">
                                            <div>
                                                <div class="dashboard-list__title">{item.name.clone()}</div>
                                                <div class="dashboard-list__meta">
                                                    {format!("{} left, minimum {}", item.stock, item.min_level)}
                                                </div>
                                            </div>
                                            <StatusBadge color=item.status.badge_color() label=item.status.label() />
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
