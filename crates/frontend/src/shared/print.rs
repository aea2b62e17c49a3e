use contracts::shared::notification::NotificationKind;
use contracts::shared::print::{PrintDocument, Printable};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::shared::date_utils::today;
use crate::shared::notifications::ToastService;

/// Time given to the new window to lay out before `print()`
const PRINT_DELAY_MS: u32 = 500;

/// Writes `html` into a new window and opens its print dialog.
pub fn open_print_window(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("Print window was blocked")?;
    let root = print_window
        .document()
        .and_then(|d| d.document_element())
        .ok_or("Print window has no document")?;
    root.set_inner_html(html);

    spawn_local(async move {
        TimeoutFuture::new(PRINT_DELAY_MS).await;
        if let Err(e) = print_window.print() {
            log::warn!("print() failed: {:?}", e);
        }
    });
    Ok(())
}

/// Prints `records` under `title`, with the toasts the list pages use.
pub fn print_records<T: Printable>(toasts: ToastService, title: &str, records: &[T]) {
    let html = PrintDocument::new(title, today(), records).to_html();
    match open_print_window(&html) {
        Ok(()) => {
            log::info!("Printing {} ({} rows)", title, records.len());
            toasts.notify("Print dialog opened", NotificationKind::Info);
        }
        Err(e) => {
            log::warn!("{e}");
            toasts.notify(e, NotificationKind::Error);
        }
    }
}
