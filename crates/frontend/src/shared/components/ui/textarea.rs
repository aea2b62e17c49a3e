use leptos::prelude::*;

/// Labelled multi-line input bound to a string signal
#[component]
pub fn FormTextarea(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                rows=rows.unwrap_or(3)
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
