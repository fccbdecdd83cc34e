//! # Reports Hex
//!
//! The application service and inbound HTTP adapter for the sales
//! reporting API. The service is generic over the store and seed ports
//! defined in `reports-types`; adapters are injected at compile time.

pub mod inbound;

mod openapi;
mod service;


pub use openapi::ApiDoc;
pub use service::ReportService;
