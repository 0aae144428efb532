//! Shared helpers for the integration tests of the connector's crates.

pub mod deployment;
pub mod fake_api;
pub mod fake_server;
pub mod fixtures;
pub mod logging;
