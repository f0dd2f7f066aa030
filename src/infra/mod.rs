//! Backend access: configuration, transport, per-resource queries, journey fan-out.

pub mod client;
pub mod config;
pub mod journey;
pub mod queries;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use journey::{endpoint_conditions, fetch_journey_results, settle_submission};
