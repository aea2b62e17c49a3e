//! Add/edit form for a stock item, shown in a modal.

use crate::shared::components::ui::{label_options, FormInput, FormSelect};
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::use_stores;
use contracts::domain::a001_stock::aggregate::{StockCategory, StockDto, StockItem};
use contracts::domain::common::EntityId;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

/// One signal per form field
#[derive(Clone, Copy)]
struct StockForm {
    name: RwSignal<String>,
    sku: RwSignal<String>,
    category: RwSignal<String>,
    stock: RwSignal<String>,
    min_level: RwSignal<String>,
    expiry: RwSignal<String>,
}

impl StockForm {
    fn from_dto(dto: StockDto) -> Self {
        Self {
            name: RwSignal::new(dto.name),
            sku: RwSignal::new(dto.sku),
            category: RwSignal::new(dto.category),
            stock: RwSignal::new(dto.stock),
            min_level: RwSignal::new(dto.min_level),
            expiry: RwSignal::new(dto.expiry),
        }
    }

    fn to_dto(self) -> StockDto {
        StockDto {
            name: self.name.get_untracked(),
            sku: self.sku.get_untracked(),
            category: self.category.get_untracked(),
            stock: self.stock.get_untracked(),
            min_level: self.min_level.get_untracked(),
            expiry: self.expiry.get_untracked(),
        }
    }
}

/// Opens the form; `None` adds a new item.
pub fn open_stock_form(modals: ModalStackService, id: Option<EntityId>) {
    modals.push(move |handle| view! { <StockDetails id=id handle=handle /> }.into_any());
}

#[component]
pub fn StockDetails(id: Option<EntityId>, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let dto = id
        .and_then(|id| stores.stock.find(id))
        .map(|item| StockDto::from_item(&item))
        .unwrap_or_default();
    let form = StockForm::from_dto(dto);
    let error = RwSignal::new(None::<String>);

    let title = if id.is_some() { "Edit Stock Item" } else { "Add Stock Item" };
    let submit_label = if id.is_some() { "Update Item" } else { "Add Item" };

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let dto = form.to_dto();
        let result = match id {
            Some(id) => stores
                .stock
                .try_update(id, |item| item.update(&dto))
                .map(|found| found.then_some("Stock item updated successfully")),
            None => StockItem::new(stores.stock.next_id(), &dto).map(|item| {
                stores.stock.insert(item);
                Some("Stock item added successfully")
            }),
        };
        match result {
            Ok(Some(message)) => {
                handle_for_submit.close();
                toasts.notify(message, NotificationKind::Success);
            }
            Ok(None) => {
                handle_for_submit.close();
                log::warn!("Stock item no longer exists, edit discarded");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let categories = label_options(StockCategory::all().iter().map(|c| c.label()));

    view! {
        <ModalHeader title=title handle=handle.clone() />
        <div class="modal-body">
            <div class="form__grid">
                <FormInput label="Product Name" value=form.name required=true />
                <FormInput label="SKU" value=form.sku required=true />
                <FormSelect
                    label="Category"
                    value=form.category
                    options=categories
                    placeholder="Select category"
                    required=true
                />
                <FormInput label="Expiry Date" value=form.expiry input_type="date" required=true />
                <FormInput label="Current Stock" value=form.stock input_type="number" required=true />
                <FormInput label="Minimum Level" value=form.min_level input_type="number" required=true />
            </div>
            <p class="form__hint">"Status is set from the stock and minimum level."</p>
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label=submit_label on_submit=on_submit />
    }
}
