//! User add/edit form and the profile modal.

use crate::shared::components::ui::{label_options, FormInput, FormSelect, StatusBadge};
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalSize, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::use_stores;
use contracts::domain::a003_user::aggregate::{ActiveStatus, Employee, EmployeeDto};
use contracts::domain::a005_role::aggregate::role_names;
use contracts::domain::common::EntityId;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct UserForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    emp_id: RwSignal<String>,
    role: RwSignal<String>,
    department: RwSignal<String>,
    status: RwSignal<String>,
}

impl UserForm {
    fn from_dto(dto: EmployeeDto) -> Self {
        Self {
            name: RwSignal::new(dto.name),
            email: RwSignal::new(dto.email),
            emp_id: RwSignal::new(dto.emp_id),
            role: RwSignal::new(dto.role),
            department: RwSignal::new(dto.department),
            status: RwSignal::new(dto.status),
        }
    }

    fn to_dto(self) -> EmployeeDto {
        EmployeeDto {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            emp_id: self.emp_id.get_untracked(),
            role: self.role.get_untracked(),
            department: self.department.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

pub fn open_user_form(modals: ModalStackService, id: Option<EntityId>) {
    modals.push(move |handle| view! { <UserDetails id=id handle=handle /> }.into_any());
}

pub fn open_user_view(modals: ModalStackService, id: EntityId) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <UserView id=id handle=handle /> }.into_any()
    });
}

#[component]
pub fn UserDetails(id: Option<EntityId>, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let dto = id
        .and_then(|id| stores.users.find(id))
        .map(|e| EmployeeDto::from_employee(&e))
        .unwrap_or_default();
    let form = UserForm::from_dto(dto);
    let error = RwSignal::new(None::<String>);

    let title = if id.is_some() { "Edit User" } else { "Add User" };
    let submit_label = if id.is_some() { "Update User" } else { "Add User" };

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let dto = form.to_dto();
        let result = match id {
            Some(id) => stores
                .users
                .try_update(id, |e| e.update(&dto))
                .map(|found| found.then_some("User updated successfully")),
            None => Employee::new(stores.users.next_id(), &dto).map(|e| {
                stores.users.insert(e);
                Some("User added successfully")
            }),
        };
        match result {
            Ok(Some(message)) => {
                handle_for_submit.close();
                toasts.notify(message, NotificationKind::Success);
            }
            Ok(None) => {
                handle_for_submit.close();
                log::warn!("User no longer exists, edit discarded");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    // Roles come from the roles store, active ones first
    let roles = Signal::derive(move || {
        stores.roles.with(|roles| {
            role_names(roles)
                .into_iter()
                .map(|name| (name.clone(), name))
                .collect::<Vec<_>>()
        })
    });
    let statuses = label_options(ActiveStatus::all().iter().map(|s| s.label()));

    view! {
        <ModalHeader title=title handle=handle.clone() />
        <div class="modal-body">
            <div class="form__grid">
                <FormInput label="Full Name" value=form.name required=true />
                <FormInput label="Email" value=form.email input_type="email" required=true />
                <FormInput label="Employee ID" value=form.emp_id placeholder="EMP004" required=true />
                <FormSelect label="Role" value=form.role options=roles placeholder="Select role" required=true />
                <FormInput label="Department" value=form.department required=true />
                <FormSelect label="Status" value=form.status options=statuses required=true />
            </div>
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label=submit_label on_submit=on_submit />
    }
}

#[component]
pub fn UserView(id: EntityId, handle: ModalHandle) -> impl IntoView {
    let user = use_stores().users.find(id);

    view! {
        <ModalHeader title="User Details" handle=handle />
        <div class="modal-body">
            {match user {
                Some(u) => view! {
                    <div class="profile">
                        <div class="avatar avatar--large">{u.avatar()}</div>
                        <div>
                            <h3 class="profile__name">{u.name.clone()}</h3>
                            <p class="profile__meta">{u.role.clone()}</p>
                        </div>
                    </div>
                    <dl class="details-list">
                        <dt>"Email"</dt>
                        <dd>{u.email.clone()}</dd>
                        <dt>"Employee ID"</dt>
                        <dd>{u.emp_id.clone()}</dd>
                        <dt>"Department"</dt>
                        <dd>{u.department.clone()}</dd>
                        <dt>"Last Login"</dt>
                        <dd>{u.last_login.clone()}</dd>
                        <dt>"Status"</dt>
                        <dd>
                            <StatusBadge color=u.status.badge_color() label=u.status.label() />
                        </dd>
                    </dl>
                }
                .into_any(),
                None => view! { <p class="empty-state">"User not found"</p> }.into_any(),
            }}
        </div>
    }
}
