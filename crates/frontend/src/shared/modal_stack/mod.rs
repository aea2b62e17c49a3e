use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Width presets for the modal surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl ModalSize {
    pub fn max_width(&self) -> &'static str {
        match self {
            ModalSize::Small => "28rem",
            ModalSize::Medium => "42rem",
            ModalSize::Large => "56rem",
            ModalSize::XLarge => "72rem",
        }
    }

    pub fn modal_class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal--small",
            ModalSize::Medium => "modal--medium",
            ModalSize::Large => "modal--large",
            ModalSize::XLarge => "modal--xlarge",
        }
    }
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    size: ModalSize,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Centralized modal stack.
///
/// - Supports push/close/pop
/// - Escape closes only the topmost modal (handled by `ModalHost`)
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: the closing click handler may still be on the stack
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        !self.stack.with(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.stack.with(Vec::len)
    }

    /// Push a medium-sized modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_sized(ModalSize::default(), builder)
    }

    pub fn push_sized<F>(&self, size: ModalSize, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

        self.stack.update(|s| {
            s.push(ModalEntry { id, builder, size });
        });

        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modals() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modals();

    // Global Escape handler: closes only the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost is mounted once for the whole app lifetime; keep closure alive.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    // z-index based on current stack order
                    let z_index = 1000 + idx as i32;
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));

                    let handle = ModalHandle { id, svc };
                    let view = (entry.builder)(handle);

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=format!("max-width: {};", entry.size.max_width())
                            modal_class=entry.size.modal_class().to_string()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_presets_grow() {
        let widths: Vec<f64> = [ModalSize::Small, ModalSize::Medium, ModalSize::Large, ModalSize::XLarge]
            .iter()
            .map(|s| s.max_width().trim_end_matches("rem").parse().unwrap())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ModalSize::default(), ModalSize::Medium);
    }
}
