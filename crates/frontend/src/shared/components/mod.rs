pub mod bulk_actions_bar;
pub mod card_animated;
pub mod export_buttons;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use bulk_actions_bar::BulkActionsBar;
pub use card_animated::CardAnimated;
pub use export_buttons::ExportButtons;
pub use filter_panel::{FilterPanel, FilterSelect};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
