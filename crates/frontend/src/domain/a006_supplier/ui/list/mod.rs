use crate::domain::a006_supplier::ui::details::{open_supplier_form, open_supplier_view, rating_stars};
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
use contracts::domain::a003_user::aggregate::ActiveStatus;
use contracts::domain::a006_supplier::aggregate::{Supplier, SupplierFilter};
use contracts::shared::export::ExportFormat;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SupplierList() -> impl IntoView {
    let store = use_stores().suppliers;
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::<SupplierFilter>::new();

    let page = Memo::new(move |_| store.with(|items| controller.page(items)));

    let search = controller.filter_value(|f| f.search.clone());
    let status = controller.filter_value(|f| f.status.map(|s| s.slug()).unwrap_or_default());
    let status_options = ActiveStatus::all()
        .iter()
        .map(|s| (s.slug(), s.label().to_string()))
        .collect::<Vec<_>>();

    let supplier_card = move |supplier: Supplier| {
        let id = supplier.id;
        view! {
            <div class="supplier-card">
                <div class="supplier-card__header">
                    <span class="supplier-card__icon">{icon_sized("truck", 28)}</span>
                    <StatusBadge color=supplier.status.badge_color() label=supplier.status.label() />
                </div>
                <h3 class="supplier-card__name">{supplier.name.clone()}</h3>
                <p class="supplier-card__contact">{supplier.contact_person.clone()}</p>
                <div class="rating">
                    {rating_stars(supplier.stars())}
                    <span class="rating__value">{format!("{:.1}", supplier.rating)}</span>
                </div>
                <ul class="supplier-card__details">
                    <li>{icon("mail")} <span>{supplier.email.clone()}</span></li>
                    <li>{icon("phone")} <span>{supplier.phone.clone()}</span></li>
                    <li>{icon("map-pin")} <span>{supplier.location.clone()}</span></li>
                    <li>{icon("package")} <span>{format!("{} products", supplier.products_supplied)}</span></li>
                </ul>
                <div class="supplier-card__actions">
                    <button class="row-action" title="View" on:click=move |_| open_supplier_view(modals, id)>
                        {icon("eye")}
                    </button>
                    <button class="row-action" title="Edit" on:click=move |_| open_supplier_form(modals, Some(id))>
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
            </div>
        }
    };

    let active_filters = controller.active_filters::<Supplier>();
    view! {
        <PageFrame page_id="a006_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="Suppliers" subtitle="Manufacturers and distributors">
                <ExportButtons
                    on_export=Callback::new(move |format: ExportFormat| export_store(store, toasts, format))
                    on_print=Callback::new(move |_| print_store(store, toasts, "Suppliers"))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_supplier_form(modals, None)>
                    {icon("plus")}
                    " Add Supplier"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    search=search
                    on_search=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                    search_placeholder="Search suppliers..."
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

                <div class="card-grid">
                    {move || page.get().rows.into_iter().map(supplier_card).collect_view()}
                </div>
                <Show when=move || page.with(|p| p.is_empty())>
                    <div class="empty-state">"No suppliers match the current filters"</div>
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
