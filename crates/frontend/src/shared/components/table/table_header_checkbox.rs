//! Select-all checkbox in the header of a list table
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     ids=Signal::derive(move || page.get().rows.iter().map(|r| r.id).collect())
//!     selected=controller.selected
//!     on_change=Callback::new(move |check_all: bool| controller.select_all(ids, check_all))
//! />
//! ```

use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

/// Header checkbox covering the rows currently on screen.
///
/// Shows checked, unchecked or indeterminate depending on how many of `ids`
/// are in `selected`.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the visible rows
    #[prop(into)]
    ids: Signal<Vec<EntityId>>,

    #[prop(into)]
    selected: Signal<HashSet<EntityId>>,

    /// `true` selects every visible row, `false` clears them
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let ids = ids.get();
        if ids.is_empty() {
            return CheckboxState::Unchecked;
        }
        let picked = selected.with(|sel| ids.iter().filter(|id| sel.contains(id)).count());
        if picked == 0 {
            CheckboxState::Unchecked
        } else if picked == ids.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a property only, no attribute exists for it
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckboxState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select all"
                prop:checked=move || checkbox_state.get() == CheckboxState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
