//! Common types and traits for all entity records

pub mod aggregate_id;
pub mod aggregate_root;
pub mod validation;

pub use aggregate_id::{next_id, EntityId};
pub use aggregate_root::AggregateRoot;
pub use validation::{require_email, require_non_negative, require_text, ValidationError};
