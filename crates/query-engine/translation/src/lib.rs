//! Translation of NDC query requests into execution plans.

pub mod translation;
