//! Translate the incoming QueryRequest to an ExecutionPlan to be run against the Cloudflare API.

pub mod error;
pub mod execution_plan;
pub mod query;
