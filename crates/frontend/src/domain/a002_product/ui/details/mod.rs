//! Product add/edit form and the read-only product card modal.

use crate::shared::components::ui::{label_options, FormInput, FormSelect, StatusBadge};
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalSize, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::use_stores;
use contracts::domain::a002_product::aggregate::{
    Product, ProductCategory, ProductDto, ProductStatus,
};
use contracts::domain::common::EntityId;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct ProductForm {
    name: RwSignal<String>,
    sku: RwSignal<String>,
    category: RwSignal<String>,
    manufacturer: RwSignal<String>,
    price: RwSignal<String>,
    stock: RwSignal<String>,
    status: RwSignal<String>,
}

impl ProductForm {
    fn from_dto(dto: ProductDto) -> Self {
        Self {
            name: RwSignal::new(dto.name),
            sku: RwSignal::new(dto.sku),
            category: RwSignal::new(dto.category),
            manufacturer: RwSignal::new(dto.manufacturer),
            price: RwSignal::new(dto.price),
            stock: RwSignal::new(dto.stock),
            status: RwSignal::new(dto.status),
        }
    }

    fn to_dto(self) -> ProductDto {
        ProductDto {
            name: self.name.get_untracked(),
            sku: self.sku.get_untracked(),
            category: self.category.get_untracked(),
            manufacturer: self.manufacturer.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

pub fn open_product_form(modals: ModalStackService, id: Option<EntityId>) {
    modals.push(move |handle| view! { <ProductDetails id=id handle=handle /> }.into_any());
}

pub fn open_product_view(modals: ModalStackService, id: EntityId) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <ProductView id=id handle=handle /> }.into_any()
    });
}

#[component]
pub fn ProductDetails(id: Option<EntityId>, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let dto = id
        .and_then(|id| stores.products.find(id))
        .map(|p| ProductDto::from_product(&p))
        .unwrap_or_default();
    let form = ProductForm::from_dto(dto);
    let error = RwSignal::new(None::<String>);

    let title = if id.is_some() { "Edit Product" } else { "Add Product" };
    let submit_label = if id.is_some() { "Update Product" } else { "Add Product" };

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let dto = form.to_dto();
        let result = match id {
            Some(id) => stores
                .products
                .try_update(id, |p| p.update(&dto))
                .map(|found| found.then_some("Product updated successfully")),
            None => Product::new(stores.products.next_id(), &dto).map(|p| {
                stores.products.insert(p);
                Some("Product added successfully")
            }),
        };
        match result {
            Ok(Some(message)) => {
                handle_for_submit.close();
                toasts.notify(message, NotificationKind::Success);
            }
            Ok(None) => {
                handle_for_submit.close();
                log::warn!("Product no longer exists, edit discarded");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let categories = label_options(ProductCategory::all().iter().map(|c| c.label()));
    let statuses = label_options(ProductStatus::all().iter().map(|s| s.label()));

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
                <FormInput label="Manufacturer" value=form.manufacturer required=true />
                <FormInput label="Price (₹)" value=form.price input_type="number" step="0.01" required=true />
                <FormInput label="Stock" value=form.stock input_type="number" required=true />
                <FormSelect label="Status" value=form.status options=statuses required=true />
            </div>
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label=submit_label on_submit=on_submit />
    }
}

#[component]
pub fn ProductView(id: EntityId, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let product = stores.products.find(id);

    view! {
        <ModalHeader title="Product Details" handle=handle />
        <div class="modal-body">
            {match product {
                Some(p) => view! {
                    <dl class="details-list">
                        <dt>"Name"</dt>
                        <dd>{p.name.clone()}</dd>
                        <dt>"SKU"</dt>
                        <dd>{p.sku.clone()}</dd>
                        <dt>"Category"</dt>
                        <dd>{p.category.label()}</dd>
                        <dt>"Manufacturer"</dt>
                        <dd>{p.manufacturer.clone()}</dd>
                        <dt>"Price"</dt>
                        <dd>{p.price_display()}</dd>
                        <dt>"Stock"</dt>
                        <dd>{format!("{} units", p.stock)}</dd>
                        <dt>"Status"</dt>
                        <dd>
                            <StatusBadge color=p.status.badge_color() label=p.status.label() />
                        </dd>
                    </dl>
                }
                .into_any(),
                None => view! { <p class="empty-state">"Product not found"</p> }.into_any(),
            }}
        </div>
    }
}
