use chrono::Utc;
use contracts::shared::notification::NotificationKind;
use contracts::system::auth::{LoginRequest, Session, LOGIN_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::dialogs::confirm;
use crate::shared::notifications::ToastService;

pub const LOGIN_SUCCESS: &str = "Login successful! Welcome to Pharma Connect.";
pub const LOGIN_FAILED: &str = "Invalid credentials. Please try again.";
pub const LOGOUT_CONFIRM: &str = "Are you sure you want to logout?";
pub const LOGOUT_DONE: &str = "You have been logged out successfully.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from localStorage before the first render
    let restored = storage::load_session();
    if let Some(session) = &restored {
        log::info!("Restored session for {}", session.username);
    }
    let (auth_state, set_auth_state) = signal(AuthState { session: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login after the simulated latency
pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, String> {
    TimeoutFuture::new(LOGIN_DELAY_MS).await;

    if !request.is_valid() {
        log::warn!("Rejected login for '{}'", request.username.trim());
        return Err(LOGIN_FAILED.to_string());
    }

    let session = Session::new(&request.username, Utc::now());
    if let Err(e) = storage::save_session(&session) {
        // The session still works for this page load
        log::warn!("{e}");
    }
    log::info!("User {} logged in", session.username);
    set_auth_state.set(AuthState {
        session: Some(session.clone()),
    });
    Ok(session)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("User logged out");
}

/// Logout behind a browser confirm; used by the header menu and Alt+L.
pub fn confirm_logout() -> Callback<()> {
    let (_, set_auth_state) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    Callback::new(move |_| {
        if !confirm(LOGOUT_CONFIRM) {
            return;
        }
        do_logout(set_auth_state);
        ctx.reset();
        toasts.notify(LOGOUT_DONE, NotificationKind::Info);
    })
}
