//! Shared records and pure logic for the Pharma Connect admin dashboard.
//!
//! Everything here is plain Rust with no browser dependency, so the list
//! pipeline, export rendering and demo session rules are unit tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
