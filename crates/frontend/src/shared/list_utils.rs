//! List page plumbing shared by every table and card grid: query state,
//! row selection, the sort indicator and the debounced search box.

use contracts::domain::common::EntityId;
use contracts::shared::list_query::{ListFilter, ListPage, ListQuery, Sortable};
use contracts::shared::notification::NotificationKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;

use crate::shared::notifications::ToastService;

/// Delay between the last keystroke and the search being applied
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const FILTERS_CLEARED: &str = "Filters cleared";

/// Query (filter, sort, page) plus the checked rows of one list page.
pub struct ListController<F: Send + Sync + 'static> {
    pub query: RwSignal<ListQuery<F>>,
    pub selected: RwSignal<HashSet<EntityId>>,
}

impl<F: Send + Sync + 'static> Clone for ListController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for ListController<F> {}

impl<F> ListController<F>
where
    F: Clone + Default + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_filter(F::default())
    }

    pub fn with_filter(filter: F) -> Self {
        Self {
            query: RwSignal::new(ListQuery::new(filter)),
            selected: RwSignal::new(HashSet::new()),
        }
    }

    /// Current page of `items` (tracked)
    pub fn page<T>(&self, items: &[T]) -> ListPage<T>
    where
        T: Clone + Sortable,
        F: ListFilter<T>,
    {
        self.query.with(|q| q.apply(items))
    }

    /// Changes the filter and goes back to page 1.
    pub fn update_filter(&self, change: impl FnOnce(&mut F)) {
        self.query.update(|q| q.update_filter(change));
    }

    pub fn clear_filters(&self, toasts: ToastService) {
        self.query.update(|q| q.reset_filter());
        toasts.notify(FILTERS_CLEARED, NotificationKind::Success);
    }

    pub fn filter_value<R>(&self, read: impl Fn(&F) -> R + Send + Sync + 'static) -> Signal<R>
    where
        R: Clone + Send + Sync + 'static,
    {
        let query = self.query;
        Signal::derive(move || query.with(|q| read(&q.filter)))
    }

    /// Number of filters set, search included; `T` is the row type.
    pub fn active_filters<T: 'static>(&self) -> Signal<usize>
    where
        F: ListFilter<T>,
    {
        self.filter_value(|f| <F as ListFilter<T>>::active_count(f))
    }

    pub fn toggle_sort(&self, field: &str) {
        self.query.update(|q| q.toggle_sort(field));
    }

    pub fn sort_field(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.sort_field.clone().unwrap_or_default()))
    }

    pub fn sort_ascending(&self) -> Signal<bool> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.sort_ascending))
    }

    pub fn go_to(&self, page: usize) {
        self.query.update(|q| q.go_to(page));
    }

    pub fn toggle_selected(&self, id: EntityId, checked: bool) {
        self.selected.update(|sel| {
            if checked {
                sel.insert(id);
            } else {
                sel.remove(&id);
            }
        });
    }

    /// Checks or unchecks every id in `ids`, leaving other rows as they are.
    pub fn select_all(&self, ids: &[EntityId], checked: bool) {
        self.selected.update(|sel| {
            for id in ids {
                if checked {
                    sel.insert(*id);
                } else {
                    sel.remove(id);
                }
            }
        });
    }

    pub fn clear_selection(&self) {
        self.selected.update(HashSet::clear);
    }

    /// Drops ids that no longer exist in the store
    pub fn forget(&self, id: EntityId) {
        self.selected.update(|sel| {
            sel.remove(&id);
        });
    }

    pub fn selection_count(&self) -> usize {
        self.selected.with(HashSet::len)
    }
}

/// Sort arrow for a header: `▲`/`▼` on the sorted column, `⇅` elsewhere
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box that waits for typing to pause before calling `on_change`.
#[component]
pub fn SearchInput(
    /// Applied search text; the box is reset when this goes empty
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Bumped on every keystroke; a pending timer only fires if it is still current
    let generation = StoredValue::new(0u64);

    // "Clear filters" resets the applied value from outside
    Effect::new(move |_| {
        if value.get().is_empty() {
            set_input_value.set(String::new());
        }
    });

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        let ticket = generation.get_value() + 1;
        generation.set_value(ticket);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(ticket) {
                on_change.run(text);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stock::aggregate::StockItem;
    use contracts::shared::list_query::SearchFilter;

    #[test]
    fn sort_indicator_follows_direction() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("sku", "name", true), " ⇅");
        assert!(get_sort_class("name", "name").ends_with("--active"));
        assert_eq!(get_sort_class("", "name"), "table__sort-indicator");
    }

    fn selected_ids(controller: ListController<SearchFilter>) -> Vec<EntityId> {
        let mut ids: Vec<_> = controller.selected.get_untracked().into_iter().collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn select_all_touches_only_given_rows() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = ListController::<SearchFilter>::new();
            controller.toggle_selected(9, true);

            controller.select_all(&[1, 2, 3], true);
            assert_eq!(selected_ids(controller), vec![1, 2, 3, 9]);
            assert_eq!(controller.selection_count(), 4);

            controller.select_all(&[1, 2, 3], false);
            assert_eq!(selected_ids(controller), vec![9]);
        });
    }

    #[test]
    fn toggle_forget_and_clear_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = ListController::<SearchFilter>::new();
            controller.toggle_selected(4, true);
            controller.toggle_selected(5, true);
            controller.toggle_selected(4, true);
            assert_eq!(controller.selection_count(), 2);

            controller.toggle_selected(4, false);
            assert_eq!(selected_ids(controller), vec![5]);

            controller.forget(5);
            controller.forget(77);
            assert_eq!(controller.selection_count(), 0);

            controller.select_all(&[6, 7], true);
            controller.clear_selection();
            assert!(selected_ids(controller).is_empty());
        });
    }

    #[test]
    fn active_filter_count_follows_search() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = ListController::<SearchFilter>::new();
            let active = controller.active_filters::<StockItem>();
            assert_eq!(active.get_untracked(), 0);

            controller.update_filter(|f| f.search = "para".into());
            assert_eq!(active.get_untracked(), 1);

            controller.update_filter(|f| f.search.clear());
            assert_eq!(active.get_untracked(), 0);
        });
    }
}

