//! Top bar: sidebar toggle, current page title, clock, alerts bell and the user menu.

pub mod notifications_dropdown;
pub mod user_dropdown;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::clock_text;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use notifications_dropdown::NotificationsDropdown;
use user_dropdown::UserDropdown;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Clock refresh period
const CLOCK_TICK_MS: u32 = 60_000;

fn now_text() -> String {
    clock_text(chrono::Local::now().time())
}

/// Closes a dropdown on a click outside `root` or on Escape.
pub(crate) fn dismiss_on_outside(root: NodeRef<leptos::html::Div>, is_open: RwSignal<bool>) {
    let click = window_event_listener(leptos::ev::click, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = match (root.get_untracked(), target) {
            (Some(root), Some(target)) => root.contains(Some(&target)),
            _ => false,
        };
        if !inside {
            is_open.set(false);
        }
    });
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            is_open.set(false);
        }
    });
    on_cleanup(move || {
        click.remove();
        escape.remove();
    });
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let clock = RwSignal::new(now_text());
    spawn_local(async move {
        loop {
            TimeoutFuture::new(CLOCK_TICK_MS).await;
            // Disposed once the header unmounts (logout)
            if clock.try_set(now_text()).is_some() {
                break;
            }
        }
    });

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title="Toggle navigation"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__logo">{icon("pill")}" Pharma Connect"</span>
                <span class="top-header__title">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__clock" title="Current time">
                    {icon("clock")}
                    {move || clock.get()}
                </span>
                <NotificationsDropdown />
                <UserDropdown />
            </div>
        </header>
    }
}
