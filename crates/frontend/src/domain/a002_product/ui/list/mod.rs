use crate::domain::a002_product::ui::details::{open_product_form, open_product_view};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{
    ExportButtons, FilterPanel, FilterSelect, PageHeader, PaginationControls,
};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_actions::{delete_with_confirm, export_store, print_store};
use crate::shared::list_utils::ListController;
use crate::shared::modal_stack::use_modals;
use crate::shared::notifications::use_toasts;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::use_stores;
use contracts::domain::a002_product::aggregate::{
    PriceRange, Product, ProductCategory, ProductFilter, ProductStatus,
};
use contracts::shared::export::ExportFormat;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    fn activated_message(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid view activated",
            ViewMode::List => "List view activated",
        }
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let store = use_stores().products;
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::<ProductFilter>::new();
    let view_mode = RwSignal::new(ViewMode::Grid);

    let page = Memo::new(move |_| store.with(|items| controller.page(items)));

    let search = controller.filter_value(|f| f.search.clone());
    let category = controller.filter_value(|f| f.category.map(|c| c.slug()).unwrap_or_default());
    let status = controller.filter_value(|f| f.status.map(|s| s.slug()).unwrap_or_default());
    let price = controller.filter_value(|f| f.price.map(|p| p.slug()).unwrap_or_default());

    let category_options = ProductCategory::all()
        .iter()
        .map(|c| (c.slug(), c.label().to_string()))
        .collect::<Vec<_>>();
    let status_options = ProductStatus::all()
        .iter()
        .map(|s| (s.slug(), s.label().to_string()))
        .collect::<Vec<_>>();
    let price_options = PriceRange::all()
        .iter()
        .map(|p| (p.slug(), p.caption().to_string()))
        .collect::<Vec<_>>();

    let switch_view = move |mode: ViewMode| {
        if view_mode.get_untracked() != mode {
            view_mode.set(mode);
            toasts.notify(mode.activated_message(), NotificationKind::Info);
        }
    };

    let delete = move |id| {
        delete_with_confirm(store, controller, toasts, id);
    };

    let on_sort = Callback::new(move |field: String| controller.toggle_sort(&field));

    let product_card = move |product: Product| {
        let id = product.id;
        let sold_out = product.stock == 0;
        view! {
            <div class="product-card">
                <div class="product-card__header">
                    <span class="product-card__icon">{icon_sized("pill", 28)}</span>
                    <StatusBadge color=product.status.badge_color() label=product.status.label() />
                </div>
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__meta">{format!("SKU: {}", product.sku)}</p>
                <p class="product-card__meta">{product.manufacturer.clone()}</p>
                <div class="product-card__facts">
                    <span class="product-card__category">{product.category.label()}</span>
                    <span class="product-card__price">{product.price_display()}</span>
                </div>
                <p class="product-card__stock" class:text-danger=sold_out>
                    {format!("Stock: {} units", product.stock)}
                </p>
                <div class="product-card__actions">
                    <button class="row-action" title="View" on:click=move |_| open_product_view(modals, id)>
                        {icon("eye")}
                    </button>
                    <button class="row-action" title="Edit" on:click=move |_| open_product_form(modals, Some(id))>
                        {icon("edit")}
                    </button>
                    <button class="row-action row-action--danger" title="Delete" on:click=move |_| delete(id)>
                        {icon("trash")}
                    </button>
                </div>
            </div>
        }
    };

    let product_row = move |product: Product| {
        let id = product.id;
        let name = product.name.clone();
        let sku = product.sku.clone();
        let category = product.category.label();
        let manufacturer = product.manufacturer.clone();
        let price = product.price_display();
        let stock = product.stock;
        let status_color = product.status.badge_color();
        let status_label = product.status.label();
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <strong>{name}</strong>
                    </TableCellLayout>
                </TableCell>
                <TableCell>{sku}</TableCell>
                <TableCell>{category}</TableCell>
                <TableCell>{manufacturer}</TableCell>
                <TableCell>{price}</TableCell>
                <TableCell>{stock}</TableCell>
                <TableCell>
                    <StatusBadge color=status_color label=status_label />
                </TableCell>
                <TableCell>
                    <div class="row-actions">
                        <button class="row-action" title="View" on:click=move |_| open_product_view(modals, id)>
                            {icon("eye")}
                        </button>
                        <button class="row-action" title="Edit" on:click=move |_| open_product_form(modals, Some(id))>
                            {icon("edit")}
                        </button>
                        <button class="row-action row-action--danger" title="Delete" on:click=move |_| delete(id)>
                            {icon("trash")}
                        </button>
                    </div>
                </TableCell>
            </TableRow>
        }
    };

    let active_filters = controller.active_filters::<Product>();
    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" subtitle="Product catalog and pricing">
                <div class="view-toggle">
                    <button
                        class="view-toggle__btn"
                        class:view-toggle__btn--active=move || view_mode.get() == ViewMode::Grid
                        title="Grid view"
                        on:click=move |_| switch_view(ViewMode::Grid)
                    >
                        {icon("grid")}
                    </button>
                    <button
                        class="view-toggle__btn"
                        class:view-toggle__btn--active=move || view_mode.get() == ViewMode::List
                        title="List view"
                        on:click=move |_| switch_view(ViewMode::List)
                    >
                        {icon("list")}
                    </button>
                </div>
                <ExportButtons
                    on_export=Callback::new(move |format: ExportFormat| export_store(store, toasts, format))
                    on_print=Callback::new(move |_| print_store(store, toasts, "Products"))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_product_form(modals, None)
                >
                    {icon("plus")}
                    " Add Product"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    on_search=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                    search_placeholder="Search products..."
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_| controller.clear_filters(toasts))
                >
                    <FilterSelect
                        all_label="All Categories"
                        options=category_options
                        value=category
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.category = ProductCategory::from_label(&slug))
                        })
                    />
                    <FilterSelect
                        all_label="All Status"
                        options=status_options
                        value=status
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.status = ProductStatus::from_label(&slug))
                        })
                    />
                    <FilterSelect
                        all_label="All Prices"
                        options=price_options
                        value=price
                        on_change=Callback::new(move |slug: String| {
                            controller.update_filter(|f| f.price = PriceRange::from_label(&slug))
                        })
                    />
                </FilterPanel>

                {move || match view_mode.get() {
                    ViewMode::Grid => view! {
                        <div class="card-grid">
                            {move || page.get().rows.into_iter().map(product_card).collect_view()}
                        </div>
                    }
                    .into_any(),
                    ViewMode::List => view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 900px;">
                                <TableHeader>
                                    <TableRow>
                                        <SortableHeaderCell label="Product Name" sort_field="name" min_width=200.0
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <SortableHeaderCell label="SKU" sort_field="sku"
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <SortableHeaderCell label="Category" sort_field="category"
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <SortableHeaderCell label="Manufacturer" sort_field="manufacturer"
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <SortableHeaderCell label="Price" sort_field="price"
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <SortableHeaderCell label="Stock" sort_field="stock" min_width=80.0
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <SortableHeaderCell label="Status" sort_field="status"
                                            current_sort_field=controller.sort_field() sort_ascending=controller.sort_ascending() on_sort=on_sort />
                                        <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || page.get().rows.into_iter().map(product_row).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any(),
                }}

                <Show when=move || page.with(|p| p.is_empty())>
                    <div class="empty-state">"No products match the current filters"</div>
                </Show>

                <PaginationControls
                    pagination=Signal::derive(move || page.with(|p| p.pagination))
                    total=Signal::derive(move || page.with(|p| p.total))
                    on_page_change=Callback::new(move |p: usize| controller.go_to(p))
                />
            </div>
        </PageFrame>
    }
}
