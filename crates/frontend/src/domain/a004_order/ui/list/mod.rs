use crate::domain::a004_order::ui::details::{open_order_form, open_order_tracking, open_order_view};
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{
    BulkActionsBar, ExportButtons, FilterPanel, FilterSelect, PageHeader, PaginationControls,
};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::list_actions::{bulk_delete, bulk_export, export_store, print_store};
use crate::shared::list_utils::ListController;
use crate::shared::modal_stack::use_modals;
use crate::shared::notifications::{use_toasts, ToastService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::{use_stores, EntityStore};
use contracts::domain::a004_order::aggregate::{
    DateRange, Order, OrderFilter, OrderPriority, OrderStatus,
};
use contracts::domain::common::EntityId;
use contracts::shared::export::ExportFormat;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;
use thaw::*;

/// Pending -> Processing. Anything else is left alone.
fn approve_order(store: EntityStore<Order>, toasts: ToastService, id: EntityId) {
    let approved = store.update(id, |order| {
        if order.can_approve() {
            order.approve();
            Some(order.order_number.clone())
        } else {
            None
        }
    });
    if let Some(Some(number)) = approved {
        toasts.notify(
            format!("Order {number} approved and moved to processing"),
            NotificationKind::Success,
        );
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let store = use_stores().orders;
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::with_filter(OrderFilter::as_of(today()));

    let page = Memo::new(move |_| store.with(|items| controller.page(items)));
    let page_ids = Signal::derive(move || {
        page.with(|p| p.rows.iter().map(|r| r.id).collect::<Vec<EntityId>>())
    });

    let search = controller.filter_value(|f| f.search.clone());
    let status = controller.filter_value(|f| f.status.map(|s| s.slug()).unwrap_or_default());
    let priority = controller.filter_value(|f| f.priority.map(|p| p.slug()).unwrap_or_default());
    let date_range = controller.filter_value(|f| f.date_range.map(|d| d.slug()).unwrap_or_default());

    let status_options = OrderStatus::all()
        .iter()
        .map(|s| (s.slug(), s.label().to_string()))
        .collect::<Vec<_>>();
    let priority_options = OrderPriority::all()
        .iter()
        .map(|p| (p.slug(), p.label().to_string()))
        .collect::<Vec<_>>();
    let date_options = DateRange::all()
        .iter()
        .map(|d| (d.slug(), d.caption().to_string()))
        .collect::<Vec<_>>();

    let on_sort = Callback::new(move |field: String| controller.toggle_sort(&field));

    let active_filters = controller.active_filters::<Order>();
    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders Management" subtitle="Customer orders and fulfilment">
                <ExportButtons
                    on_export=Callback::new(move |format: ExportFormat| export_store(store, toasts, format))
                    on_print=Callback::new(move |_| print_store(store, toasts, "Orders Management"))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_order_form(modals, None)>
                    {icon("plus")}
                    " Create Order"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    on_search=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                    search_placeholder="Search by order ID or customer..."
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_| controller.clear_filters(toasts))
                >
                    <FilterSelect
                        all_label="All Status"
                        options=status_options
                        value=status
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.status = OrderStatus::from_label(&slug))
                        })
                    />
                    <FilterSelect
                        all_label="All Priorities"
                        options=priority_options
                        value=priority
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.priority = OrderPriority::from_label(&slug))
                        })
                    />
                    <FilterSelect
                        all_label="All Dates"
                        options=date_options
                        value=date_range
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| {
                                f.date_range = DateRange::from_label(&slug);
                                f.today = today();
                            })
                        })
                    />
                </FilterPanel>

                <BulkActionsBar
                    count=Signal::derive(move || controller.selection_count())
                    on_delete=Callback::new(move |_| bulk_delete(store, controller, toasts))
                    on_export=Callback::new(move |_| bulk_export(store, controller, toasts))
                    on_clear=Callback::new(move |_| controller.clear_selection())
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    ids=page_ids
                                    selected=controller.selected
                                    on_change=Callback::new(move |checked: bool| {
                                        controller.select_all(&page_ids.get_untracked(), checked)
                                    })
                                />
                                <SortableHeaderCell label="Order ID" sort_field="order_number" min_width=130.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Customer" sort_field="customer" min_width=200.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Products" sort_field="products" min_width=80.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Total" sort_field="total"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field="status"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Priority" sort_field="priority"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Date" sort_field="date"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <TableHeaderCell resizable=false min_width=150.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page.get()
                                    .rows
                                    .into_iter()
                                    .map(|order| {
                                        let id = order.id;
                                        let can_approve = order.can_approve();
                                    let order_number = order.order_number.clone();
                                    let customer = order.customer.clone();
                                    let email = order.email.clone();
                                    let products = format!("{} items", order.products);
                                    let total = order.total_display();
                                    let status_color = order.status.badge_color();
                                    let status_label = order.status.label();
                                    let priority_color = order.priority.badge_color();
                                    let priority_label = order.priority.label();
                                    let date = format_date(order.date);
                                        view! {
                                            <TableRow>
                                                <TableCellCheckbox
                                                    item_id=id
                                                    selected=controller.selected
                                                    on_change=Callback::new(move |(id, checked)| controller.toggle_selected(id, checked))
                                                />
                                                <TableCell>
                                                    <strong>{order_number}</strong>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="user-cell__name">{customer}</div>
                                                    <div class="user-cell__email">{email}</div>
                                                </TableCell>
                                                <TableCell>{products}</TableCell>
                                                <TableCell>{total}</TableCell>
                                                <TableCell>
                                                    <StatusBadge color=status_color label=status_label />
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge color=priority_color label=priority_label />
                                                </TableCell>
                                                <TableCell>{date}</TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <button class="row-action" title="View" on:click=move |_| open_order_view(modals, id)>
                                                            {icon("eye")}
                                                        </button>
                                                        <button class="row-action" title="Edit" on:click=move |_| open_order_form(modals, Some(id))>
                                                            {icon("edit")}
                                                        </button>
                                                        {can_approve.then(|| view! {
                                                            <button
                                                                class="row-action row-action--success"
                                                                title="Approve"
                                                                on:click=move |_| approve_order(store, toasts, id)
                                                            >
                                                                {icon("check-circle")}
                                                            </button>
                                                        })}
                                                        <button class="row-action" title="Track" on:click=move |_| open_order_tracking(modals, id)>
                                                            {icon("map-pin")}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.is_empty())>
                        <div class="empty-state">"No orders match the current filters"</div>
                    </Show>
                </div>

                <PaginationControls
                    pagination=Signal::derive(move || page.with(|p| p.pagination))
                    total=Signal::derive(move || page.with(|p| p.total))
                    on_page_change=Callback::new(move |p: usize| controller.go_to(p))
                />
            </div>
        </PageFrame>
    }
}
