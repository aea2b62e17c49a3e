use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned surface; the content renders its own header and footer.
#[component]
pub fn ModalFrame(
    /// Called on overlay click.
    on_close: Callback<()>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    #[prop(optional)]
    modal_class: Option<String>,
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when both press and release land on the overlay, so a text
    // selection dragged out of the form keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let surface_style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class style=surface_style on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Title row with a close button, shared by every form and detail modal.
#[component]
pub fn ModalHeader(#[prop(into)] title: String, handle: ModalHandle) -> impl IntoView {
    view! {
        <div class="modal-header">
            <h2 class="modal-title">{title}</h2>
            <button class="modal-close" title="Close" on:click=move |_| handle.close()>
                {icon("x")}
            </button>
        </div>
    }
}

/// Validation message above the form buttons
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="alert alert--error">
                    {icon("alert-triangle")}
                    <span>{e}</span>
                </div>
            }
        })
    }
}

/// Cancel + submit row at the bottom of a form modal.
#[component]
pub fn ModalFooter(
    handle: ModalHandle,
    #[prop(into)]
    submit_label: String,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-footer">
            <thaw::Button
                appearance=thaw::ButtonAppearance::Secondary
                on_click=move |_| handle.close()
            >
                "Cancel"
            </thaw::Button>
            <thaw::Button
                appearance=thaw::ButtonAppearance::Primary
                on_click=move |_| on_submit.run(())
            >
                {submit_label}
            </thaw::Button>
        </div>
    }
}
