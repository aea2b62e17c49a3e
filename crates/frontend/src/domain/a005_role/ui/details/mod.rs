use crate::shared::components::ui::{label_options, FormInput, FormSelect, FormTextarea};
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalSize, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::use_stores;
use contracts::domain::a003_user::aggregate::ActiveStatus;
use contracts::domain::a005_role::aggregate::{Role, RoleDto};
use contracts::domain::common::EntityId;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

pub fn open_role_form(modals: ModalStackService, id: Option<EntityId>) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <RoleDetails id=id handle=handle /> }.into_any()
    });
}

#[component]
pub fn RoleDetails(id: Option<EntityId>, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let dto = id
        .and_then(|id| stores.roles.find(id))
        .map(|r| RoleDto::from_role(&r))
        .unwrap_or_default();
    let name = RwSignal::new(dto.name);
    let description = RwSignal::new(dto.description);
    let status = RwSignal::new(dto.status);
    let error = RwSignal::new(None::<String>);

    let title = if id.is_some() { "Edit Role" } else { "Add Role" };
    let submit_label = if id.is_some() { "Update Role" } else { "Add Role" };

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let dto = RoleDto {
            name: name.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
        };
        let result = match id {
            Some(id) => stores
                .roles
                .try_update(id, |r| r.update(&dto))
                .map(|found| found.then_some("Role updated successfully")),
            None => Role::new(stores.roles.next_id(), &dto).map(|r| {
                stores.roles.insert(r);
                Some("Role added successfully")
            }),
        };
        match result {
            Ok(Some(message)) => {
                handle_for_submit.close();
                toasts.notify(message, NotificationKind::Success);
            }
            Ok(None) => {
                handle_for_submit.close();
                log::warn!("Role no longer exists, edit discarded");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let statuses = label_options(ActiveStatus::all().iter().map(|s| s.label()));

    view! {
        <ModalHeader title=title handle=handle.clone() />
        <div class="modal-body">
            <FormInput label="Role Name" value=name required=true />
            <FormTextarea label="Description" value=description required=true />
            <FormSelect label="Status" value=status options=statuses required=true />
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label=submit_label on_submit=on_submit />
    }
}
