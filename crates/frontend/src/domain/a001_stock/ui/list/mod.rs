use crate::domain::a001_stock::ui::details::open_stock_form;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{
    BulkActionsBar, ExportButtons, FilterPanel, FilterSelect, PageHeader, PaginationControls,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_actions::{bulk_delete, bulk_export, delete_with_confirm, export_store, print_store};
use crate::shared::list_utils::ListController;
use crate::shared::modal_stack::use_modals;
use crate::shared::notifications::use_toasts;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::use_stores;
use contracts::domain::a001_stock::aggregate::{StockCategory, StockFilter, StockItem, StockStatus};
use contracts::domain::common::EntityId;
use contracts::shared::export::ExportFormat;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StockList() -> impl IntoView {
    let stores = use_stores();
    let store = stores.stock;
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::<StockFilter>::new();

    let page = Memo::new(move |_| store.with(|items| controller.page(items)));
    let page_ids = Signal::derive(move || {
        page.with(|p| p.rows.iter().map(|r| r.id).collect::<Vec<EntityId>>())
    });

    let search = controller.filter_value(|f| f.search.clone());
    let category = controller.filter_value(|f| f.category.map(|c| c.slug()).unwrap_or_default());
    let status = controller.filter_value(|f| f.status.map(|s| s.slug()).unwrap_or_default());

    let category_options = StockCategory::all()
        .iter()
        .map(|c| (c.slug(), c.label().to_string()))
        .collect::<Vec<_>>();
    let status_options = StockStatus::all()
        .iter()
        .map(|s| (s.slug(), s.label().to_string()))
        .collect::<Vec<_>>();

    let on_sort = Callback::new(move |field: String| controller.toggle_sort(&field));

    let active_filters = controller.active_filters::<StockItem>();
    view! {
        <PageFrame page_id="a001_stock--list" category=PAGE_CAT_LIST>
            <PageHeader title="Stock Management" subtitle="Track inventory levels and expiry dates">
                <ExportButtons
                    on_export=Callback::new(move |format: ExportFormat| export_store(store, toasts, format))
                    on_print=Callback::new(move |_| print_store(store, toasts, "Stock Management"))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_stock_form(modals, None)
                >
                    {icon("plus")}
                    " Add Stock Item"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    on_search=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                    search_placeholder="Search by name or SKU..."
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_| controller.clear_filters(toasts))
                >
                    <FilterSelect
                        all_label="All Categories"
                        options=category_options
                        value=category
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.category = StockCategory::from_label(&slug))
                        })
                    />
                    <FilterSelect
                        all_label="All Status"
                        options=status_options
                        value=status
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.status = StockStatus::from_label(&slug))
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
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    ids=page_ids
                                    selected=controller.selected
                                    on_change=Callback::new(move |checked: bool| {
                                        controller.select_all(&page_ids.get_untracked(), checked)
                                    })
                                />
                                <SortableHeaderCell label="Product Name" sort_field="name" min_width=200.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="SKU" sort_field="sku"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Category" sort_field="category"
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Stock" sort_field="stock" min_width=80.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Min Level" sort_field="min_level" min_width=80.0
                                    current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                <SortableHeaderCell label="Expiry" sort_field="expiry"
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
                                    .map(|item| {
                                        let id = item.id;
                                        let low = item.needs_reorder();
                                        view! {
                                            <TableRow>
                                                <TableCellCheckbox
                                                    item_id=id
                                                    selected=controller.selected
                                                    on_change=Callback::new(move |(id, checked)| controller.toggle_selected(id, checked))
                                                />
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{item.name.clone()}</strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>{item.sku.clone()}</TableCell>
                                                <TableCell>{item.category.label()}</TableCell>
                                                <TableCell>
                                                    <span class:text-danger=low>{item.stock}</span>
                                                </TableCell>
                                                <TableCell>{item.min_level}</TableCell>
                                                <TableCell>{format_date(item.expiry)}</TableCell>
                                                <TableCell>
                                                    <StatusBadge color=item.status.badge_color() label=item.status.label() />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <button class="row-action" title="Edit" on:click=move |_| open_stock_form(modals, Some(id))>
                                                            {icon("edit")}
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
                        <div class="empty-state">"No stock items match the current filters"</div>
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
