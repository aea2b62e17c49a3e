use super::dismiss_on_outside;
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use contracts::dashboards::d001_overview::dto::{header_alerts, BELL_SUMMARY};
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

/// Bell with a badge; opening it also raises the summary toast.
#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let toasts = use_toasts();
    let is_open = RwSignal::new(false);
    let root = NodeRef::<leptos::html::Div>::new();
    dismiss_on_outside(root, is_open);

    let alerts = header_alerts();
    let count = alerts.len();

    let toggle = move |_| {
        let opening = !is_open.get_untracked();
        is_open.set(opening);
        if opening {
            toasts.notify(BELL_SUMMARY, NotificationKind::Info);
        }
    };

    view! {
        <div class="header-dropdown" node_ref=root>
            <button class="top-header__icon-btn" title="Notifications" on:click=toggle>
                {icon("bell")}
                <span class="top-header__badge">{count}</span>
            </button>
            <Show when=move || is_open.get()>
                <div class="header-dropdown__menu header-dropdown__menu--wide">
                    <div class="header-dropdown__title">"Notifications"</div>
                    {alerts
                        .iter()
                        .map(|alert| {
                            let class = format!("header-alert header-alert--{}", alert.kind.label());
                            view! {
                                <div class=class>
                                    {icon(alert.kind.icon_name())}
                                    <div class="header-alert__body">
                                        <div class="header-alert__message">{alert.message}</div>
                                        <div class="header-alert__time">{alert.time}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
