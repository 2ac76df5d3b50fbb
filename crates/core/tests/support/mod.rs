//! Shared test helpers for `rosterline-core` integration tests.
//!
//! Provides an in-memory remote store and scheduling engine implementing all
//! core ports, so the service flows can be exercised deterministically
//! without any transport.

pub mod remote;
