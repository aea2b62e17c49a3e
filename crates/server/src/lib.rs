//! Development server for the Pharma Connect dashboard.
//!
//! Serves the trunk-built `dist/` directory with caching disabled so a
//! rebuild shows up on the next reload.

pub mod routes;
pub mod shared;
