//! vitals-sheets
//!
//! Read-only Google Sheets access. Thin wrapper around the Sheets v4 values
//! endpoint, authenticated with a service-account key.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod values;
