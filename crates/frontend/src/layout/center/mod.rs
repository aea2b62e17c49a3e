pub mod center;
pub mod page_content;

pub use center::Center;
pub use page_content::PageContent;
