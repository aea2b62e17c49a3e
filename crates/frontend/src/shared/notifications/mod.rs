//! Toast notifications stacked in the top-right corner.

use contracts::shared::notification::{NotificationKind, DEFAULT_TOAST_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Fade-out before a closed toast is removed
const FADE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
}

/// Toast queue, newest last.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Shows a toast for the default lifetime.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        self.notify_for(message, kind, DEFAULT_TOAST_MS);
    }

    /// `lifetime_ms == 0` keeps the toast until it is closed.
    pub fn notify_for(&self, message: impl Into<String>, kind: NotificationKind, lifetime_ms: u32) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            leaving: false,
        };
        let id = toast.id;
        log::debug!("toast [{}] {}", kind.label(), toast.message);
        self.toasts.update(|t| t.push(toast));

        if lifetime_ms > 0 {
            let svc = *self;
            spawn_local(async move {
                TimeoutFuture::new(lifetime_ms).await;
                svc.dismiss(id);
            });
        }
        id
    }

    /// Raises a toast after `delay_ms`, for simulated background work.
    pub fn notify_later(&self, delay_ms: u32, message: impl Into<String>, kind: NotificationKind) {
        let svc = *self;
        let message = message.into();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            svc.notify(message, kind);
        });
    }

    /// Fades the toast out, then removes it. Unknown ids are ignored.
    pub fn dismiss(&self, id: Uuid) {
        let mut found = false;
        self.toasts.update(|t| {
            if let Some(toast) = t.iter_mut().find(|t| t.id == id && !t.leaving) {
                toast.leaving = true;
                found = true;
            }
        });
        if !found {
            return;
        }
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(FADE_MS).await;
            svc.toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    pub fn len(&self) -> usize {
        self.toasts.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the toast stack at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || svc.toasts.get()
                key=|toast| (toast.id, toast.leaving)
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() class:toast--leaving=toast.leaving role="status">
                            <span class="toast__icon">{icon(toast.kind.icon_name())}</span>
                            <p class="toast__message">{toast.message.clone()}</p>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
