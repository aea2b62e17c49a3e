//! Clickable column header that toggles the list sort
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Stock"
//!     sort_field="stock"
//!     current_sort_field=controller.sort_field()
//!     sort_ascending=controller.sort_ascending()
//!     on_sort=Callback::new(move |field: String| controller.toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field name understood by the record's `Sortable` impl
    sort_field: &'static str,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(sort_field.to_string())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || {
                        get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
