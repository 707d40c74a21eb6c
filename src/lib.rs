//! List-view state layer of the Pushkind CRM dashboard.
//!
//! Every paginated, filterable, sortable, multi-select list screen is built
//! on three providers bundled in [`services::list_view::ListView`]:
//! the query state controller, the fetch orchestrator and the selection model.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

/// Resource name of the leads list endpoint.
pub const LEADS_RESOURCE: &str = "leads";
