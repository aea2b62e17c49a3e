pub mod badge;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{badge_color, StatusBadge};
pub use input::FormInput;
pub use select::{label_options, FormSelect};
pub use textarea::FormTextarea;
