use crate::shared::icons::icon;
use contracts::shared::list_query::{Pagination, MAX_VISIBLE_PAGES};
use leptos::prelude::*;

/// Pager under every list: summary text, prev/next and a window of numbered buttons.
///
/// Pages are 1-based. The numbered window holds at most five pages around the
/// current one.
#[component]
pub fn PaginationControls(
    /// Current pagination, already clamped to `total`
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Rows matching the filter
    #[prop(into)]
    total: Signal<usize>,

    /// Called with the requested 1-based page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let current = move || pagination.get().page;
    let total_pages = move || pagination.get().total_pages(total.get());

    view! {
        <div class="pagination">
            <span class="pagination__info">
                {move || pagination.get().summary(total.get())}
            </span>
            <div class="pagination__buttons">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if pagination.get_untracked().has_previous() {
                            on_page_change.run(current() - 1);
                        }
                    }
                    disabled=move || !pagination.get().has_previous()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    pagination
                        .get()
                        .window(total.get(), MAX_VISIBLE_PAGES)
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=move || current() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if current() < total_pages() {
                            on_page_change.run(current() + 1);
                        }
                    }
                    disabled=move || current() >= total_pages()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
