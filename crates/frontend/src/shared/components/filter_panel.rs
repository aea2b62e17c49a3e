use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use thaw::*;

/// Search box, filter selects and "Clear filters" above a list.
#[component]
pub fn FilterPanel(
    /// Applied search text
    #[prop(into)]
    search: Signal<String>,

    on_search: Callback<String>,

    #[prop(optional, into)]
    search_placeholder: String,

    /// Filters currently set, search included
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_clear: Callback<()>,

    /// The filter selects
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <SearchInput value=search on_change=on_search placeholder=search_placeholder />
            <div class="filter-panel__selects">
                {icon("filter")}
                {children()}
            </div>
            <div class="filter-panel__clear">
                <Show when=move || { active_filters_count.get() > 0 }>
                    <span class="badge badge--primary" title="Active filters">
                        {move || active_filters_count.get()}
                    </span>
                </Show>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_clear.run(())
                >
                    "Clear Filters"
                </Button>
            </div>
        </div>
    }
}

/// Filter `<select>` whose first option means "no filter".
///
/// Option values are slugs; an empty value clears the filter.
#[component]
pub fn FilterSelect(
    /// First option, e.g. "All Categories"
    #[prop(into)]
    all_label: String,

    /// (slug, caption) pairs
    options: Vec<(String, String)>,

    /// Selected slug, empty for none
    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-panel__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{all_label}</option>
            {options
                .into_iter()
                .map(|(slug, caption)| {
                    let slug_for_selected = slug.clone();
                    view! {
                        <option value=slug selected=move || value.get() == slug_for_selected>
                            {caption}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
