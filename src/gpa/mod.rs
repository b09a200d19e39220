//! Web delivery of GPA charts.

pub mod handlers;
pub mod models;

pub use handlers::config;
