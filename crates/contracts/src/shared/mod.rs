pub mod export;
pub mod format;
pub mod labels;
pub mod list_query;
pub mod notification;
pub mod print;
