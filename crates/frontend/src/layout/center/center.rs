use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div
            data-zone="center"
            data-page=move || ctx.active.get().key()
            class="app-content"
        >
            {children()}
        </div>
    }
}
