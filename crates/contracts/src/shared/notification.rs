/// Default toast lifetime
pub const DEFAULT_TOAST_MS: u32 = 4000;

crate::label_enum! {
    /// Toast severity
    pub enum NotificationKind {
        Success => "success",
        Error => "error",
        Warning => "warning",
        Info => "info",
    }
}

impl NotificationKind {
    /// CSS modifier for the toast container
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Info => "toast toast--info",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "x-circle",
            NotificationKind::Warning => "alert-triangle",
            NotificationKind::Info => "info",
        }
    }
}
