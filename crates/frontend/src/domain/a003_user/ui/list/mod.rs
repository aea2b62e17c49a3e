use crate::domain::a003_user::ui::details::{open_user_form, open_user_view};
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{
    BulkActionsBar, ExportButtons, FilterPanel, FilterSelect, PageHeader, PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_actions::{bulk_delete, bulk_export, delete_with_confirm, export_store, print_store};
use crate::shared::list_utils::ListController;
use crate::shared::modal_stack::use_modals;
use crate::shared::notifications::use_toasts;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::use_stores;
use contracts::domain::a003_user::aggregate::{ActiveStatus, Employee, UserFilter};
use contracts::domain::a005_role::aggregate::role_names;
use contracts::domain::common::EntityId;
use contracts::shared::export::ExportFormat;
use contracts::shared::list_query::slugify;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UserList() -> impl IntoView {
    let stores = use_stores();
    let store = stores.users;
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::<UserFilter>::new();

    let page = Memo::new(move |_| store.with(|items| controller.page(items)));
    let page_ids = Signal::derive(move || {
        page.with(|p| p.rows.iter().map(|r| r.id).collect::<Vec<EntityId>>())
    });

    let search = controller.filter_value(|f| f.search.clone());
    let role = controller.filter_value(|f| f.role.clone().unwrap_or_default());
    let status = controller.filter_value(|f| f.status.map(|s| s.slug()).unwrap_or_default());

    let role_options = role_names(&stores.roles.snapshot())
        .into_iter()
        .map(|name| (slugify(&name), name))
        .collect::<Vec<_>>();
    let status_options = ActiveStatus::all()
        .iter()
        .map(|s| (s.slug(), s.label().to_string()))
        .collect::<Vec<_>>();

    let on_sort = Callback::new(move |field: String| controller.toggle_sort(&field));

    let active_filters = controller.active_filters::<Employee>();
    view! {
        <PageFrame page_id="a003_user--list" category=PAGE_CAT_LIST>
            <PageHeader title="User Management" subtitle="Staff accounts and access">
                <ExportButtons
                    on_export=Callback::new(move |format: ExportFormat| export_store(store, toasts, format))
                    on_print=Callback::new(move |_| print_store(store, toasts, "User Management"))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_user_form(modals, None)>
                    {icon("plus")}
                    " Add User"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    on_search=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                    search_placeholder="Search by name, email or ID..."
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_| controller.clear_filters(toasts))
                >
                    <FilterSelect
                        all_label="All Roles"
                        options=role_options
                        value=role
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.role = (!slug.is_empty()).then_some(slug))
                        })
                    />
                    <FilterSelect
                        all_label="All Status"
                        options=status_options
                        value=status
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.status = ActiveStatus::from_label(&slug))
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
                                <SortableHeaderCell label="User" sort_field="name" min_width=220.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Employee ID" sort_field="emp_id"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Role" sort_field="role" min_width=150.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Department" sort_field="department"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Last Login" sort_field="last_login" min_width=160.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field="status"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page.get()
                                    .rows
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                    let avatar = user.avatar();
                                    let name = user.name.clone();
                                    let email = user.email.clone();
                                    let emp_id = user.emp_id.clone();
                                    let role = user.role.clone();
                                    let department = user.department.clone();
                                    let last_login = user.last_login.clone();
                                    let status_color = user.status.badge_color();
                                    let status_label = user.status.label();
                                        view! {
                                            <TableRow>
                                                <TableCellCheckbox
                                                    item_id=id
                                                    selected=controller.selected
                                                    on_change=Callback::new(move |(id, checked)| controller.toggle_selected(id, checked))
                                                />
                                                <TableCell>
                                                    <div class="user-cell">
                                                        <span class="avatar">{avatar}</span>
                                                        <div>
                                                            <div class="user-cell__name">{name}</div>
                                                            <div class="user-cell__email">{email}</div>
                                                        </div>
                                                    </div>
                                                </TableCell>
                                                <TableCell>{emp_id}</TableCell>
                                                <TableCell>{role}</TableCell>
                                                <TableCell>{department}</TableCell>
                                                <TableCell>{last_login}</TableCell>
                                                <TableCell>
                                                    <StatusBadge color=status_color label=status_label />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <button class="row-action" title="Edit" on:click=move |_| open_user_form(modals, Some(id))>
                                                            {icon("edit")}
                                                        </button>
                                                        <button class="row-action" title="View" on:click=move |_| open_user_view(modals, id)>
                                                            {icon("eye")}
                                                        </button>
                                                        <button
                                                            class="row-action row-action--danger"
                                                            title="Delete"
                                                            on:click=move |_| {
                                                                delete_with_confirm(store, controller, toasts, id);
                                                            }
                                                        >
                                                            {icon("trash")}
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
                        <div class="empty-state">"No users match the current filters"</div>
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
