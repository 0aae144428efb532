//! Table metadata for the query engine.

pub mod metadata;
