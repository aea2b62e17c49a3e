use crate::domain::a005_role::ui::details::open_role_form;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{
    BulkActionsBar, ExportButtons, FilterPanel, FilterSelect, PageHeader, PaginationControls,
};
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::list_actions::{bulk_delete, bulk_export, export_store, print_store};
use crate::shared::list_utils::ListController;
use crate::shared::modal_stack::use_modals;
use crate::shared::notifications::{use_toasts, ToastService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::{use_stores, EntityStore};
use contracts::domain::a003_user::aggregate::ActiveStatus;
use contracts::domain::a005_role::aggregate::{Role, RoleFilter};
use contracts::domain::common::EntityId;
use contracts::shared::export::ExportFormat;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;
use thaw::*;

/// Roles word their delete prompt and toast with "role" after the name.
fn delete_role(
    store: EntityStore<Role>,
    controller: ListController<RoleFilter>,
    toasts: ToastService,
    id: EntityId,
) {
    let Some(role) = store.find(id) else {
        return;
    };
    if !confirm(&format!("Are you sure you want to delete {} role?", role.name)) {
        return;
    }
    store.remove(id);
    controller.forget(id);
    toasts.notify(
        format!("{} role deleted successfully", role.name),
        NotificationKind::Success,
    );
}

#[component]
pub fn RoleList() -> impl IntoView {
    let store = use_stores().roles;
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::<RoleFilter>::new();

    let page = Memo::new(move |_| store.with(|items| controller.page(items)));
    let page_ids = Signal::derive(move || {
        page.with(|p| p.rows.iter().map(|r| r.id).collect::<Vec<EntityId>>())
    });

    let search = controller.filter_value(|f| f.search.clone());
    let status = controller.filter_value(|f| f.status.map(|s| s.slug()).unwrap_or_default());
    let status_options = ActiveStatus::all()
        .iter()
        .map(|s| (s.slug(), s.label().to_string()))
        .collect::<Vec<_>>();

    let on_sort = Callback::new(move |field: String| controller.toggle_sort(&field));

    let active_filters = controller.active_filters::<Role>();
    view! {
        <PageFrame page_id="a005_role--list" category=PAGE_CAT_LIST>
            <PageHeader title="Roles Management" subtitle="Access roles assigned to users">
                <ExportButtons
                    on_export=Callback::new(move |format: ExportFormat| export_store(store, toasts, format))
                    on_print=Callback::new(move |_| print_store(store, toasts, "Roles Management"))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_role_form(modals, None)>
                    {icon("plus")}
                    " Add Role"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    on_search=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                    search_placeholder="Search roles..."
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_| controller.clear_filters(toasts))
                >
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
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    ids=page_ids
                                    selected=controller.selected
                                    on_change=Callback::new(move |checked: bool| {
                                        controller.select_all(&page_ids.get_untracked(), checked)
                                    })
                                />
                                <SortableHeaderCell label="Role Name" sort_field="name" min_width=180.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Description" sort_field="description" min_width=280.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field="status"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page.get()
                                    .rows
                                    .into_iter()
                                    .map(|role| {
                                        let id = role.id;
                                        view! {
                                            <TableRow>
                                                <TableCellCheckbox
                                                    item_id=id
                                                    selected=controller.selected
                                                    on_change=Callback::new(move |(id, checked)| controller.toggle_selected(id, checked))
                                                />
                                                <TableCell>
                                                    <span class="role-name">
                                                        {icon("shield")}
                                                        <strong>{role.name.clone()}</strong>
                                                    </span>
                                                </TableCell>
                                                <TableCell>{role.description.clone()}</TableCell>
                                                <TableCell>
                                                    <StatusBadge color=role.status.badge_color() label=role.status.label() />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <button class="row-action" title="Edit" on:click=move |_| open_role_form(modals, Some(id))>
                                                            {icon("edit")}
                                                        </button>
                                                        <button
                                                            class="row-action row-action--danger"
                                                            title="Delete"
                                                            on:click=move |_| delete_role(store, controller, toasts, id)
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
                        <div class="empty-state">"No roles match the current filters"</div>
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
