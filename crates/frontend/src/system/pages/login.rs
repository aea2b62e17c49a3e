use contracts::shared::notification::NotificationKind;
use contracts::system::auth::{LoginRequest, DEMO_CREDENTIALS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::notifications::ToastService;
use crate::system::auth::context::{do_login, use_auth, LOGIN_SUCCESS};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };

        set_is_loading.set(true);

        spawn_local(async move {
            match do_login(request, set_auth_state).await {
                // The auth state switch swaps this page for the layout
                Ok(_) => toasts.notify(LOGIN_SUCCESS, NotificationKind::Success),
                Err(e) => {
                    toasts.notify(e, NotificationKind::Error);
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__logo">{icon("pill")}</div>
                <h1>"Pharma Connect"</h1>
                <h2>"Sign in to the admin dashboard"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="admin"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="admin123"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo accounts:"</p>
                    {DEMO_CREDENTIALS.iter().map(|(user, pass)| view! {
                        <p>
                            <strong>{*user}</strong>
                            " / "
                            <code>{*pass}</code>
                        </p>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
