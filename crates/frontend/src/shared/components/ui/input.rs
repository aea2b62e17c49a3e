use leptos::prelude::*;

/// Labelled form input bound to a string signal
#[component]
pub fn FormInput(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    /// "text" (default), "email", "number", "date", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Passed through to numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                step=move || step.get()
                required=required
                disabled=disabled
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
