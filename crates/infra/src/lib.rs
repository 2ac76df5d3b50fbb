//! # Rosterline Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The REST client binding the roster store and scheduling engine
//! - The retrying HTTP transport it is built on
//! - Spreadsheet emission (two-sheet xlsx workbooks)
//! - Configuration loading from environment or file
//!
//! ## Architecture
//! - Implements traits defined in `rosterline-core`
//! - Depends on `rosterline-domain` and `rosterline-core`
//! - Contains all "impure" code (network, filesystem)

pub mod api;
pub mod config;
pub mod errors;
pub mod export;
pub mod http;

// Re-export commonly used items
pub use api::RosterApiClient;
pub use config::{ApiConfig, Config, ExportConfig};
pub use errors::InfraError;
pub use export::XlsxSink;
pub use http::HttpClient;
