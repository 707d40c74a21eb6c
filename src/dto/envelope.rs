//! Wire shape of list responses returned by the REST backend.
//!
//! Backends report pagination either through top-level fields or through a
//! nested `payload.pagination` block. Both are accepted here and folded into
//! [`crate::domain::response::ResponseEnvelope`] right after parsing.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::pagination::PaginationLink;

/// Raw response envelope as sent over HTTP.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResponseEnvelopeDto<T> {
    pub result: bool,
    pub data: Option<Vec<T>>,
    pub current_page: Option<u32>,
    pub per_page: Option<u32>,
    pub total_records: Option<u64>,
    pub total_pages: Option<u32>,
    pub message: Option<String>,
    pub payload: Option<PayloadDto>,
}

/// Nested payload carrying validation errors and pagination state.
#[derive(Debug, Default, Deserialize)]
pub struct PayloadDto {
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
    pub pagination: Option<PaginationDto>,
}

/// Pagination block of the nested payload.
#[derive(Debug, Deserialize)]
pub struct PaginationDto {
    pub page: u32,
    #[serde(alias = "items_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub links: Vec<PaginationLink>,
}
