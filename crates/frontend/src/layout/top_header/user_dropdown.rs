use super::dismiss_on_outside;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use crate::system::auth::context::{confirm_logout, use_auth};
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

/// Avatar badge with the Profile / Settings / Logout menu.
#[component]
pub fn UserDropdown() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let toasts = use_toasts();
    let logout = confirm_logout();

    let is_open = RwSignal::new(false);
    let root = NodeRef::<leptos::html::Div>::new();
    dismiss_on_outside(root, is_open);

    let session = move || auth_state.get().session;
    let badge = move || session().map(|s| s.badge()).unwrap_or_default();
    let welcome = move || session().map(|s| s.welcome()).unwrap_or_default();
    let login_time = move || {
        session()
            .and_then(|s| s.login_time)
            .map(|t| {
                let local = t.with_timezone(&chrono::Local);
                format!("Signed in at {}", local.format("%d %b %Y, %H:%M"))
            })
            .unwrap_or_default()
    };

    view! {
        <div class="header-dropdown" node_ref=root>
            <button
                class="top-header__user"
                title="Account"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <span class="top-header__avatar">{badge}</span>
                <span class="top-header__welcome">{welcome}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div class="header-dropdown__menu">
                    <div class="header-dropdown__meta">{login_time}</div>
                    <button
                        class="header-dropdown__item"
                        on:click=move |_| {
                            is_open.set(false);
                            let name = session().map(|s| s.display_name()).unwrap_or_default();
                            toasts.notify(format!("Signed in as {name}"), NotificationKind::Info);
                        }
                    >
                        {icon("user")}" Profile"
                    </button>
                    <button
                        class="header-dropdown__item"
                        on:click=move |_| {
                            is_open.set(false);
                            ctx.navigate(Page::Settings);
                        }
                    >
                        {icon("settings")}" Settings"
                    </button>
                    <button
                        class="header-dropdown__item header-dropdown__item--danger"
                        on:click=move |_| {
                            is_open.set(false);
                            logout.run(());
                        }
                    >
                        {icon("log-out")}" Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
