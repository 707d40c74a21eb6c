use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::types::{Identifiable, RowId};
use crate::dto::envelope::{PaginationDto, ResponseEnvelopeDto};
use crate::pagination::{PaginationLink, page_links};

/// Pagination metadata of a loaded page, whatever encoding the backend used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_records: Option<u64>,
    pub total_pages: Option<u32>,
    pub links: Vec<PaginationLink>,
}

impl PaginationMeta {
    /// Fills in derivable fields: total pages from the record count and
    /// pager links when the backend sent none.
    fn complete(mut self) -> Self {
        if self.total_pages.is_none() && self.per_page > 0 {
            self.total_pages = self
                .total_records
                .map(|total| total.div_ceil(u64::from(self.per_page)))
                .map(|pages| u32::try_from(pages).unwrap_or(u32::MAX));
        }
        if self.links.is_empty() {
            if let Some(total_pages) = self.total_pages {
                self.links = page_links(self.page, total_pages);
            }
        }
        self
    }
}

impl From<PaginationDto> for PaginationMeta {
    fn from(dto: PaginationDto) -> Self {
        Self {
            page: dto.page,
            per_page: dto.per_page,
            total_records: None,
            total_pages: None,
            links: dto.links,
        }
    }
}

/// Normalized list response: rows, server messages and pagination.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(
    from = "ResponseEnvelopeDto<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct ResponseEnvelope<T> {
    pub result: bool,
    pub data: Vec<T>,
    pub message: Option<String>,
    pub errors: BTreeMap<String, Vec<String>>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> ResponseEnvelope<T> {
    /// Successful response carrying `data`.
    pub fn success(data: Vec<T>, pagination: Option<PaginationMeta>) -> Self {
        Self {
            result: true,
            data,
            message: None,
            errors: BTreeMap::new(),
            pagination: pagination.map(PaginationMeta::complete),
        }
    }

    /// Response the backend refused to serve.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            result: false,
            data: Vec::new(),
            message: Some(message.into()),
            errors: BTreeMap::new(),
            pagination: None,
        }
    }

    /// Identifiers of the loaded rows, skipping rows without one.
    pub fn row_ids(&self) -> Vec<RowId>
    where
        T: Identifiable,
    {
        self.data.iter().filter_map(Identifiable::row_id).collect()
    }
}

impl<T> From<ResponseEnvelopeDto<T>> for ResponseEnvelope<T> {
    fn from(dto: ResponseEnvelopeDto<T>) -> Self {
        let payload = dto.payload.unwrap_or_default();

        let nested = payload.pagination.map(PaginationMeta::from);
        let top_level = dto.current_page.map(|page| PaginationMeta {
            page,
            per_page: dto.per_page.unwrap_or_default(),
            total_records: None,
            total_pages: None,
            links: Vec::new(),
        });

        let pagination = nested.or(top_level).map(|mut meta| {
            meta.total_records = dto.total_records;
            meta.total_pages = dto.total_pages;
            if meta.per_page == 0 {
                meta.per_page = dto.per_page.unwrap_or_default();
            }
            meta.complete()
        });

        Self {
            result: dto.result,
            data: dto.data.unwrap_or_default(),
            message: dto.message.or(payload.message),
            errors: payload.errors,
            pagination,
        }
    }
}
