//! vitals-summary
//!
//! Progress paragraphs rendered from a canonical metric map. One fixed
//! template per mapping lineage; templates carry no conditional logic.

pub mod error;
pub mod render;
pub mod templates;
