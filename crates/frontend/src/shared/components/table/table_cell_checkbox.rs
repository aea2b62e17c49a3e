use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Row checkbox; the click does not reach the row.
#[component]
pub fn TableCellCheckbox(
    item_id: EntityId,

    #[prop(into)]
    selected: Signal<HashSet<EntityId>>,

    /// Called with (item_id, checked)
    on_change: Callback<(EntityId, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|sel| sel.contains(&item_id))
                on:change=move |ev| on_change.run((item_id, event_target_checked(&ev)))
            />
        </TableCell>
    }
}
