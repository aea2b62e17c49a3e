//! Supplier add/edit form and contact card modal.

use crate::shared::components::ui::{label_options, FormInput, FormSelect, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalSize, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::use_stores;
use contracts::domain::a003_user::aggregate::ActiveStatus;
use contracts::domain::a006_supplier::aggregate::{Supplier, SupplierDto, MAX_RATING};
use contracts::domain::common::EntityId;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct SupplierForm {
    name: RwSignal<String>,
    contact_person: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    location: RwSignal<String>,
    products_supplied: RwSignal<String>,
    rating: RwSignal<String>,
    status: RwSignal<String>,
}

impl SupplierForm {
    fn from_dto(dto: SupplierDto) -> Self {
        Self {
            name: RwSignal::new(dto.name),
            contact_person: RwSignal::new(dto.contact_person),
            email: RwSignal::new(dto.email),
            phone: RwSignal::new(dto.phone),
            location: RwSignal::new(dto.location),
            products_supplied: RwSignal::new(dto.products_supplied),
            rating: RwSignal::new(dto.rating),
            status: RwSignal::new(dto.status),
        }
    }

    fn to_dto(self) -> SupplierDto {
        SupplierDto {
            name: self.name.get_untracked(),
            contact_person: self.contact_person.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            location: self.location.get_untracked(),
            products_supplied: self.products_supplied.get_untracked(),
            rating: self.rating.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

pub fn open_supplier_form(modals: ModalStackService, id: Option<EntityId>) {
    modals.push(move |handle| view! { <SupplierDetails id=id handle=handle /> }.into_any());
}

pub fn open_supplier_view(modals: ModalStackService, id: EntityId) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <SupplierView id=id handle=handle /> }.into_any()
    });
}

/// Five star glyphs, the first `filled` highlighted
pub fn rating_stars(filled: usize) -> impl IntoView {
    (0..MAX_RATING as usize)
        .map(|i| {
            let lit = i < filled;
            view! {
                <span class="rating__star" class:rating__star--filled=lit>
                    "★"
                </span>
            }
        })
        .collect_view()
}

#[component]
pub fn SupplierDetails(id: Option<EntityId>, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let dto = id
        .and_then(|id| stores.suppliers.find(id))
        .map(|s| SupplierDto::from_supplier(&s))
        .unwrap_or_default();
    let form = SupplierForm::from_dto(dto);
    let error = RwSignal::new(None::<String>);

    let title = if id.is_some() { "Edit Supplier" } else { "Add Supplier" };
    let submit_label = if id.is_some() { "Update Supplier" } else { "Add Supplier" };

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let dto = form.to_dto();
        let result = match id {
            Some(id) => stores
                .suppliers
                .try_update(id, |s| s.update(&dto))
                .map(|found| found.then_some("Supplier updated successfully")),
            None => Supplier::new(stores.suppliers.next_id(), &dto).map(|s| {
                stores.suppliers.insert(s);
                Some("Supplier added successfully")
            }),
        };
        match result {
            Ok(Some(message)) => {
                handle_for_submit.close();
                toasts.notify(message, NotificationKind::Success);
            }
            Ok(None) => {
                handle_for_submit.close();
                log::warn!("Supplier no longer exists, edit discarded");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let statuses = label_options(ActiveStatus::all().iter().map(|s| s.label()));

    view! {
        <ModalHeader title=title handle=handle.clone() />
        <div class="modal-body">
            <div class="form__grid">
                <FormInput label="Supplier Name" value=form.name required=true />
                <FormInput label="Contact Person" value=form.contact_person required=true />
                <FormInput label="Email" value=form.email input_type="email" required=true />
                <FormInput label="Phone" value=form.phone input_type="tel" required=true />
                <FormInput label="Location" value=form.location required=true />
                <FormInput label="Products Supplied" value=form.products_supplied input_type="number" />
                <FormInput label="Rating (0-5)" value=form.rating input_type="number" step="0.1" />
                <FormSelect label="Status" value=form.status options=statuses required=true />
            </div>
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label=submit_label on_submit=on_submit />
    }
}

#[component]
pub fn SupplierView(id: EntityId, handle: ModalHandle) -> impl IntoView {
    let supplier = use_stores().suppliers.find(id);

    view! {
        <ModalHeader title="Supplier Details" handle=handle />
        <div class="modal-body">
            {match supplier {
                Some(s) => view! {
                    <h3 class="profile__name">{s.name.clone()}</h3>
                    <div class="rating">
                        {rating_stars(s.stars())}
                        <span class="rating__value">{format!("{:.1}", s.rating)}</span>
                    </div>
                    <dl class="details-list">
                        <dt>"Contact"</dt>
                        <dd>{s.contact_person.clone()}</dd>
                        <dt>{icon("mail")}</dt>
                        <dd>{s.email.clone()}</dd>
                        <dt>{icon("phone")}</dt>
                        <dd>{s.phone.clone()}</dd>
                        <dt>{icon("map-pin")}</dt>
                        <dd>{s.location.clone()}</dd>
                        <dt>"Products"</dt>
                        <dd>{s.products_supplied}</dd>
                        <dt>"Status"</dt>
                        <dd>
                            <StatusBadge color=s.status.badge_color() label=s.status.label() />
                        </dd>
                    </dl>
                }
                .into_any(),
                None => view! { <p class="empty-state">"Supplier not found"</p> }.into_any(),
            }}
        </div>
    }
}
