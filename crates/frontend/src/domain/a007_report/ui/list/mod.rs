use crate::domain::a007_report::ui::details::{
    open_generate_report, open_report_view, render_report, report_filename,
};
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::date_utils::format_date;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::export::download_text;
use crate::shared::list_utils::{ListController, SearchInput};
use crate::shared::modal_stack::use_modals;
use crate::shared::notifications::{use_toasts, ToastService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::{use_stores, EntityStores};
use contracts::domain::a007_report::aggregate::{DataBundle, Report, BUNDLE_FILENAME};
use contracts::domain::common::EntityId;
use contracts::shared::export::{to_json_value, ExportFormat};
use contracts::shared::list_query::SearchFilter;
use contracts::shared::notification::NotificationKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Simulated preparation time before a report download starts
const REPORT_DOWNLOAD_DELAY_MS: u32 = 1500;
/// Simulated preparation time of the all-stores bundle
const EXPORT_ALL_DELAY_MS: u32 = 2000;

fn download_report(stores: EntityStores, toasts: ToastService, id: EntityId) {
    let Some(report) = stores.reports.find(id) else {
        return;
    };
    toasts.notify(format!("Downloading {}...", report.name), NotificationKind::Info);
    spawn_local(async move {
        TimeoutFuture::new(REPORT_DOWNLOAD_DELAY_MS).await;
        let format: ExportFormat = report.format.into();
        let filename = report_filename(&report);
        let result = render_report(stores, report.kind, format)
            .map_err(|e| e.to_string())
            .and_then(|content| download_text(&content, &filename, format.mime_type()));
        match result {
            Ok(()) => {
                log::info!("Downloaded report {filename}");
                toasts.notify(
                    format!("{} downloaded successfully", report.name),
                    NotificationKind::Success,
                );
            }
            Err(e) => {
                log::warn!("Report download failed: {e}");
                toasts.notify(format!("Download failed: {e}"), NotificationKind::Error);
            }
        }
    });
}

fn data_bundle(stores: EntityStores) -> DataBundle {
    DataBundle {
        exported_at: chrono::Utc::now().to_rfc3339(),
        stock: stores.stock.snapshot(),
        products: stores.products.snapshot(),
        users: stores.users.snapshot(),
        orders: stores.orders.snapshot(),
        roles: stores.roles.snapshot(),
        suppliers: stores.suppliers.snapshot(),
        reports: stores.reports.snapshot(),
    }
}

fn export_all(stores: EntityStores, toasts: ToastService) {
    toasts.notify("Exporting all reports...", NotificationKind::Info);
    spawn_local(async move {
        TimeoutFuture::new(EXPORT_ALL_DELAY_MS).await;
        let result = to_json_value(&data_bundle(stores))
            .map_err(|e| e.to_string())
            .and_then(|json| download_text(&json, BUNDLE_FILENAME, ExportFormat::Json.mime_type()));
        match result {
            Ok(()) => {
                log::info!("Exported all stores to {BUNDLE_FILENAME}");
                toasts.notify("Reports exported successfully", NotificationKind::Success);
            }
            Err(e) => {
                log::warn!("Export all failed: {e}");
                toasts.notify(format!("Export failed: {e}"), NotificationKind::Error);
            }
        }
    });
}

/// Report catalog, searchable and paged like the other lists.
#[component]
pub fn ReportList() -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();
    let modals = use_modals();
    let controller = ListController::<SearchFilter>::new();

    let page = Memo::new(move |_| stores.reports.with(|items| controller.page(items)));
    let search = controller.filter_value(|f| f.search.clone());

    let report_card = move |report: Report| {
        let id = report.id;
        view! {
            <div class="report-card">
                <span class="report-card__icon">{icon_sized(report.kind.icon_name(), 28)}</span>
                <div class="report-card__body">
                    <h3 class="report-card__name">{report.name.clone()}</h3>
                    <p class="report-card__meta">
                        {format!("Generated on {}", format_date(report.generated_on))}
                    </p>
                    <span class="report-card__format">{report.format.label()}</span>
                </div>
                <div class="report-card__actions">
                    <button class="row-action" title="View" on:click=move |_| open_report_view(modals, id)>
                        {icon("eye")}
                    </button>
                    <button class="row-action" title="Download" on:click=move |_| download_report(stores, toasts, id)>
                        {icon("download")}
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a007_report--list" category=PAGE_CAT_LIST>
            <PageHeader title="Reports" subtitle="Generated reports and data exports">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export_all(stores, toasts)>
                    {icon("database")}
                    " Export All"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_generate_report(modals)>
                    {icon("file-text")}
                    " Generate Report"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| controller.update_filter(|f| f.search = text))
                        placeholder="Search reports..."
                    />
                </div>

                <div class="report-list">
                    {move || page.get().rows.into_iter().map(report_card).collect_view()}
                </div>
                <Show when=move || page.with(|p| p.is_empty())>
                    <div class="empty-state">"No reports found"</div>
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
