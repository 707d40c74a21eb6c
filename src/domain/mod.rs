//! Domain types of the list-view state layer.

pub mod lead;
pub mod query;
pub mod response;
pub mod selection;
pub mod types;
