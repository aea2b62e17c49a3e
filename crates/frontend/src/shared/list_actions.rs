//! Row and page actions shared by the list pages: delete with confirmation,
//! bulk delete/export of the checked rows, whole-store export and print.

use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::export::{to_csv, ExportFormat, TabularExport};
use contracts::shared::notification::NotificationKind;
use contracts::shared::print::Printable;
use leptos::prelude::*;
use serde::Serialize;

use crate::shared::dialogs::{bulk_delete_prompt, confirm, delete_prompt};
use crate::shared::export::{download_text, export_with_toasts, BULK_EXPORT_DELAY_MS};
use crate::shared::list_utils::ListController;
use crate::shared::notifications::ToastService;
use crate::shared::print::print_records;
use crate::shared::stores::EntityStore;

/// Asks, removes and toasts `{name} deleted successfully`. Returns whether it went.
pub fn delete_with_confirm<T, F>(
    store: EntityStore<T>,
    controller: ListController<F>,
    toasts: ToastService,
    id: EntityId,
) -> bool
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
    F: Clone + Default + Send + Sync + 'static,
{
    let Some(item) = store.find(id) else {
        return false;
    };
    let name = item.display_name().to_string();
    if !confirm(&delete_prompt(&name)) {
        return false;
    }
    store.remove(id);
    controller.forget(id);
    toasts.notify(format!("{name} deleted successfully"), NotificationKind::Success);
    true
}

/// Removes every checked row after one confirmation.
pub fn bulk_delete<T, F>(store: EntityStore<T>, controller: ListController<F>, toasts: ToastService)
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
    F: Clone + Default + Send + Sync + 'static,
{
    let ids = controller.selected.get_untracked();
    if ids.is_empty() || !confirm(&bulk_delete_prompt(ids.len())) {
        return;
    }
    let removed = store.remove_many(&ids);
    controller.clear_selection();
    toasts.notify(format!("{removed} items deleted successfully"), NotificationKind::Success);
}

/// Downloads the checked rows as CSV.
pub fn bulk_export<T, F>(store: EntityStore<T>, controller: ListController<F>, toasts: ToastService)
where
    T: AggregateRoot + TabularExport + Clone + Send + Sync + 'static,
    F: Clone + Default + Send + Sync + 'static,
{
    let rows = store.select(&controller.selected.get_untracked());
    if rows.is_empty() {
        return;
    }
    toasts.notify(
        format!("Exporting {} selected items...", rows.len()),
        NotificationKind::Info,
    );
    let filename = format!("{}_selected.csv", T::export_stem());
    let result = to_csv(&rows)
        .map_err(|e| e.to_string())
        .and_then(|csv| download_text(&csv, &filename, ExportFormat::Csv.mime_type()));
    match result {
        Ok(()) => {
            log::info!("Exported {} selected rows to {filename}", rows.len());
            toasts.notify_later(
                BULK_EXPORT_DELAY_MS,
                "Export completed successfully",
                NotificationKind::Success,
            );
        }
        Err(e) => {
            log::warn!("Bulk export failed: {e}");
            toasts.notify(format!("Export failed: {e}"), NotificationKind::Error);
        }
    }
}

/// Exports the whole store, not just the visible page.
pub fn export_store<T>(store: EntityStore<T>, toasts: ToastService, format: ExportFormat)
where
    T: AggregateRoot + TabularExport + Serialize + Clone + Send + Sync + 'static,
{
    let rows = store.snapshot();
    export_with_toasts(toasts, &rows, format);
}

/// Prints the whole store under the page title.
pub fn print_store<T>(store: EntityStore<T>, toasts: ToastService, title: &str)
where
    T: AggregateRoot + Printable + Clone + Send + Sync + 'static,
{
    let rows = store.snapshot();
    print_records(toasts, title, &rows);
}
