//! HTTP transport building blocks.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
