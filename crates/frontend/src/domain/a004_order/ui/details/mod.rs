//! Order modals: the add/edit form, the read-only summary and the tracking timeline.

use crate::shared::components::ui::{label_options, FormInput, FormSelect, StatusBadge};
use crate::shared::date_utils::{format_date, now_millis, today};
use crate::shared::icons::icon;
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalSize, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::use_stores;
use contracts::domain::a004_order::aggregate::{Order, OrderDto, OrderPriority, OrderStatus};
use contracts::domain::common::EntityId;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct OrderForm {
    customer: RwSignal<String>,
    email: RwSignal<String>,
    products: RwSignal<String>,
    total: RwSignal<String>,
    priority: RwSignal<String>,
    status: RwSignal<String>,
}

impl OrderForm {
    fn from_dto(dto: OrderDto) -> Self {
        Self {
            customer: RwSignal::new(dto.customer),
            email: RwSignal::new(dto.email),
            products: RwSignal::new(dto.products),
            total: RwSignal::new(dto.total),
            priority: RwSignal::new(dto.priority),
            status: RwSignal::new(dto.status),
        }
    }

    fn to_dto(self) -> OrderDto {
        OrderDto {
            customer: self.customer.get_untracked(),
            email: self.email.get_untracked(),
            products: self.products.get_untracked(),
            total: self.total.get_untracked(),
            priority: self.priority.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

pub fn open_order_form(modals: ModalStackService, id: Option<EntityId>) {
    modals.push(move |handle| view! { <OrderDetails id=id handle=handle /> }.into_any());
}

pub fn open_order_view(modals: ModalStackService, id: EntityId) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <OrderView id=id handle=handle /> }.into_any()
    });
}

pub fn open_order_tracking(modals: ModalStackService, id: EntityId) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <OrderTrackingView id=id handle=handle /> }.into_any()
    });
}

#[component]
pub fn OrderDetails(id: Option<EntityId>, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let dto = id
        .and_then(|id| stores.orders.find(id))
        .map(|o| OrderDto::from_order(&o))
        .unwrap_or_default();
    let form = OrderForm::from_dto(dto);
    let error = RwSignal::new(None::<String>);

    let title = if id.is_some() { "Edit Order" } else { "Create Order" };
    let submit_label = if id.is_some() { "Update Order" } else { "Create Order" };

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let dto = form.to_dto();
        let result = match id {
            Some(id) => stores
                .orders
                .try_update(id, |o| o.update(&dto))
                .map(|found| found.then_some("Order updated successfully")),
            None => Order::new(stores.orders.next_id(), &dto, today(), stores.orders.len()).map(|o| {
                stores.orders.insert(o);
                Some("Order created successfully")
            }),
        };
        match result {
            Ok(Some(message)) => {
                handle_for_submit.close();
                toasts.notify(message, NotificationKind::Success);
            }
            Ok(None) => {
                handle_for_submit.close();
                log::warn!("Order no longer exists, edit discarded");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let priorities = label_options(OrderPriority::all().iter().map(|p| p.label()));
    let statuses = label_options(OrderStatus::all().iter().map(|s| s.label()));

    view! {
        <ModalHeader title=title handle=handle.clone() />
        <div class="modal-body">
            <div class="form__grid">
                <FormInput label="Customer Name" value=form.customer required=true />
                <FormInput label="Customer Email" value=form.email input_type="email" required=true />
                <FormInput label="Products" value=form.products input_type="number" required=true />
                <FormInput label="Total Amount (₹)" value=form.total input_type="number" step="0.01" required=true />
                <FormSelect label="Priority" value=form.priority options=priorities required=true />
                <FormSelect label="Status" value=form.status options=statuses required=true />
            </div>
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label=submit_label on_submit=on_submit />
    }
}

#[component]
pub fn OrderView(id: EntityId, handle: ModalHandle) -> impl IntoView {
    let order = use_stores().orders.find(id);

    view! {
        <ModalHeader title="Order Details" handle=handle />
        <div class="modal-body">
            {match order {
                Some(o) => view! {
                    <dl class="details-list">
                        <dt>"Order ID"</dt>
                        <dd>{o.order_number.clone()}</dd>
                        <dt>"Customer"</dt>
                        <dd>{o.customer.clone()}</dd>
                        <dt>"Email"</dt>
                        <dd>{o.email.clone()}</dd>
                        <dt>"Products"</dt>
                        <dd>{format!("{} items", o.products)}</dd>
                        <dt>"Total"</dt>
                        <dd>{o.total_display()}</dd>
                        <dt>"Status"</dt>
                        <dd>
                            <StatusBadge color=o.status.badge_color() label=o.status.label() />
                        </dd>
                        <dt>"Priority"</dt>
                        <dd>
                            <StatusBadge color=o.priority.badge_color() label=o.priority.label() />
                        </dd>
                        <dt>"Date"</dt>
                        <dd>{format_date(o.date)}</dd>
                    </dl>
                }
                .into_any(),
                None => view! { <p class="empty-state">"Order not found"</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn OrderTrackingView(id: EntityId, handle: ModalHandle) -> impl IntoView {
    let tracking = use_stores().orders.find(id).map(|o| o.tracking(now_millis()));

    view! {
        <ModalHeader title="Track Order" handle=handle />
        <div class="modal-body">
            {match tracking {
                Some(t) => view! {
                    <h3 class="tracking__title">{format!("Order {}", t.order_number)}</h3>
                    <ol class="tracking">
                        {t.steps
                            .into_iter()
                            .map(|step| {
                                view! {
                                    <li class="tracking__step" class:tracking__step--done=step.done>
                                        <span class="tracking__marker">
                                            {if step.done { icon("check") } else { icon("clock") }}
                                        </span>
                                        <div>
                                            <div class="tracking__step-title">{step.title}</div>
                                            <div class="tracking__step-when">{step.when}</div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <div class="tracking__info">
                        <p>
                            <strong>"Tracking Number: "</strong>
                            {t.tracking_number}
                        </p>
                        <p>
                            <strong>"Carrier: "</strong>
                            {t.carrier}
                        </p>
                    </div>
                }
                .into_any(),
                None => view! { <p class="empty-state">"Order not found"</p> }.into_any(),
            }}
        </div>
    }
}
