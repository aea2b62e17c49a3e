//! Browser side of CSV/JSON export: renders through `contracts::shared::export`
//! and hands the text to the browser as a download.

use contracts::shared::export::{ExportError, ExportFormat, TabularExport};
use contracts::shared::notification::NotificationKind;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::notifications::ToastService;

/// Delay of the "Export completed successfully" toast after a bulk export
pub const BULK_EXPORT_DELAY_MS: u32 = 2000;

/// Renders `rows` and downloads them. Returns the file name.
pub fn export_records<T>(rows: &[T], format: ExportFormat) -> Result<String, ExportError>
where
    T: TabularExport + Serialize,
{
    let (filename, content) = format.render(rows)?;
    download_text(&content, &filename, format.mime_type()).map_err(ExportError::Serialize)?;
    Ok(filename)
}

/// Export with the usual toasts: "Preparing export...", then the file name or a warning.
pub fn export_with_toasts<T>(toasts: ToastService, rows: &[T], format: ExportFormat)
where
    T: TabularExport + Serialize,
{
    if rows.is_empty() {
        toasts.notify(ExportError::Empty.to_string(), NotificationKind::Warning);
        return;
    }
    toasts.notify("Preparing export...", NotificationKind::Info);
    match export_records(rows, format) {
        Ok(filename) => {
            log::info!("Exported {} rows to {filename}", rows.len());
            toasts.notify(format!("{filename} downloaded successfully"), NotificationKind::Success);
        }
        Err(e) => {
            log::warn!("Export failed: {e}");
            toasts.notify(format!("Export failed: {e}"), NotificationKind::Error);
        }
    }
}

/// Creates a Blob holding `content`
fn create_blob(content: &str, mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Starts a browser download of `content`
pub fn download_text(content: &str, filename: &str, mime_type: &str) -> Result<(), String> {
    let blob = create_blob(content, mime_type)?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
