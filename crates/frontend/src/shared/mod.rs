pub mod components;
pub mod date_utils;
pub mod dialogs;
pub mod export;
pub mod icons;
pub mod list_actions;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod print;
pub mod stores;
