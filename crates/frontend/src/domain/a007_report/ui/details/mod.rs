//! Report rendering from the live stores, the preview modal and the generate form.

use crate::shared::components::ui::{label_options, FormSelect};
use crate::shared::date_utils::{format_date, today};
use crate::shared::modal_frame::{FormError, ModalFooter, ModalHeader};
use crate::shared::modal_stack::{ModalHandle, ModalSize, ModalStackService};
use crate::shared::notifications::use_toasts;
use crate::shared::stores::{use_stores, EntityStores};
use contracts::domain::a007_report::aggregate::{Report, ReportFormat, ReportKind};
use contracts::domain::common::EntityId;
use contracts::shared::export::{to_csv, to_json, ExportError, ExportFormat};
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

/// Renders the store behind `kind` in `format`.
pub fn render_report(
    stores: EntityStores,
    kind: ReportKind,
    format: ExportFormat,
) -> Result<String, ExportError> {
    match (kind, format) {
        (ReportKind::Stock, ExportFormat::Csv) => to_csv(&stores.stock.snapshot()),
        (ReportKind::Stock, ExportFormat::Json) => to_json(&stores.stock.snapshot()),
        (ReportKind::Sales, ExportFormat::Csv) => to_csv(&stores.orders.snapshot()),
        (ReportKind::Sales, ExportFormat::Json) => to_json(&stores.orders.snapshot()),
        (ReportKind::Users, ExportFormat::Csv) => to_csv(&stores.users.snapshot()),
        (ReportKind::Users, ExportFormat::Json) => to_json(&stores.users.snapshot()),
        (ReportKind::Roles, ExportFormat::Csv) => to_csv(&stores.roles.snapshot()),
        (ReportKind::Roles, ExportFormat::Json) => to_json(&stores.roles.snapshot()),
        (ReportKind::Suppliers, ExportFormat::Csv) => to_csv(&stores.suppliers.snapshot()),
        (ReportKind::Suppliers, ExportFormat::Json) => to_json(&stores.suppliers.snapshot()),
    }
}

/// `stock_report_20240115.csv`
pub fn report_filename(report: &Report) -> String {
    let format: ExportFormat = report.format.into();
    format!("{}.{}", report.file_stem(), format.extension())
}

pub fn open_report_view(modals: ModalStackService, id: EntityId) {
    modals.push_sized(ModalSize::Large, move |handle| {
        view! { <ReportView id=id handle=handle /> }.into_any()
    });
}

pub fn open_generate_report(modals: ModalStackService) {
    modals.push_sized(ModalSize::Small, move |handle| {
        view! { <GenerateReport handle=handle /> }.into_any()
    });
}

/// Header facts plus the CSV of the underlying store
#[component]
pub fn ReportView(id: EntityId, handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let report = stores.reports.find(id);

    view! {
        <ModalHeader title="Report Preview" handle=handle />
        <div class="modal-body">
            {match report {
                Some(r) => {
                    let preview = render_report(stores, r.kind, ExportFormat::Csv)
                        .unwrap_or_else(|e| e.to_string());
                    view! {
                        <dl class="details-list">
                            <dt>"Report"</dt>
                            <dd>{r.name.clone()}</dd>
                            <dt>"Type"</dt>
                            <dd>{r.kind.label()}</dd>
                            <dt>"Generated"</dt>
                            <dd>{format_date(r.generated_on)}</dd>
                            <dt>"Format"</dt>
                            <dd>{r.format.label()}</dd>
                        </dl>
                        <pre class="report-preview">{preview}</pre>
                    }
                    .into_any()
                }
                None => view! { <p class="empty-state">"Report not found"</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn GenerateReport(handle: ModalHandle) -> impl IntoView {
    let stores = use_stores();
    let toasts = use_toasts();

    let kind_choice = RwSignal::new(String::new());
    let format_choice = RwSignal::new(ReportFormat::Csv.label().to_string());
    let error = RwSignal::new(None::<String>);

    let handle_for_submit = handle.clone();
    let on_submit = Callback::new(move |_| {
        let Some(kind) = ReportKind::from_label(&kind_choice.get_untracked()) else {
            error.set(Some("Report Type is required".to_string()));
            return;
        };
        let format = ReportFormat::from_label(&format_choice.get_untracked()).unwrap_or(ReportFormat::Csv);
        let report = Report::generate(stores.reports.next_id(), kind, format, today());
        let name = report.name.clone();
        stores.reports.insert(report);
        handle_for_submit.close();
        toasts.notify(format!("{name} generated successfully"), NotificationKind::Success);
    });

    let kinds = ReportKind::all()
        .iter()
        .map(|k| (k.label().to_string(), k.title().to_string()))
        .collect::<Vec<_>>();
    let formats = label_options(ReportFormat::all().iter().map(|f| f.label()));

    view! {
        <ModalHeader title="Generate Report" handle=handle.clone() />
        <div class="modal-body">
            <FormSelect label="Report Type" value=kind_choice options=kinds placeholder="Select report" required=true />
            <FormSelect label="Format" value=format_choice options=formats required=true />
            <FormError error=error />
        </div>
        <ModalFooter handle=handle submit_label="Generate" on_submit=on_submit />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn filename_follows_report_format() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let csv = Report::generate(1, ReportKind::Stock, ReportFormat::Csv, day);
        let json = Report::generate(2, ReportKind::Users, ReportFormat::Json, day);
        assert_eq!(report_filename(&csv), "stock_report_20240115.csv");
        assert_eq!(report_filename(&json), "users_report_20240115.json");
    }
}
