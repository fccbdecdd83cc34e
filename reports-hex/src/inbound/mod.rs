//! Inbound HTTP adapter.

pub mod handlers;
pub mod server;

pub use server::HttpServer;
