//! vitals-core
//!
//! Pure domain types for the coaching dashboard: the raw cell grid, field
//! descriptors, row location and field extraction. No network dependency.
//! This is the shared vocabulary every other vitals crate speaks.

pub mod descriptor;
pub mod error;
pub mod extract;
pub mod grid;
pub mod locate;
pub mod models;
pub mod source;
