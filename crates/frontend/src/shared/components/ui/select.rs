use leptos::prelude::*;

/// `(value, caption)` pairs for a label enum, value and caption both the label
pub fn label_options(labels: impl IntoIterator<Item = &'static str>) -> Vec<(String, String)> {
    labels
        .into_iter()
        .map(|l| (l.to_string(), l.to_string()))
        .collect()
}

/// Labelled `<select>` bound to a string signal.
///
/// With `placeholder` set, an empty first option is rendered for "nothing picked".
#[component]
pub fn FormSelect(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    /// (value, caption) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                class="form__select"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, caption)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {caption}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_use_label_for_both_sides() {
        let opts = label_options(["Tablets", "Syrups"]);
        assert_eq!(opts[1], ("Syrups".to_string(), "Syrups".to_string()));
    }
}
