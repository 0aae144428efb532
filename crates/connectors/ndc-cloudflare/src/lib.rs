pub mod capabilities;
pub mod connector;
pub mod explain;
pub mod query;
pub mod schema;
pub mod state;
