//! Immutable query state driving a list fetch and the partial updates applied
//! to it.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::types::{PerPage, SortOrder, TypeConstraintError};

/// Opaque filter payload: field name to value, ordered for a stable request key.
pub type Filter = BTreeMap<String, String>;

/// Column and direction the backend should sort by.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SortState {
    #[serde(rename = "sort")]
    pub field: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// Pagination, sort, filter and search parameters of one list screen.
///
/// The only way to obtain a state other than the default is
/// [`QueryState::apply`], so `page >= 1` and a supported `per_page` always
/// hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryState {
    page: u32,
    per_page: PerPage,
    #[serde(flatten)]
    sort: Option<SortState>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    filter: Filter,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_per_page(PerPage::default())
    }
}

impl QueryState {
    /// First page with the given page size and nothing else set.
    pub fn with_per_page(per_page: PerPage) -> Self {
        Self {
            page: 1,
            per_page,
            sort: None,
            filter: Filter::new(),
            search: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> PerPage {
        self.per_page
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Produces the next state with the supplied fields overwritten.
    ///
    /// Changing sort, filter, search or page size without an explicit page
    /// moves back to the first page. Invalid pagination values and filter
    /// keys that collide once trimmed are rejected and `self` is left
    /// untouched.
    pub fn apply(&self, update: &QueryStateUpdate) -> Result<QueryState, TypeConstraintError> {
        let mut next = self.clone();
        let mut reset_page = false;

        if let Some(page) = update.page {
            if page == 0 {
                return Err(TypeConstraintError::InvalidPage(page));
            }
            next.page = page;
        }

        if let Some(per_page) = update.per_page {
            next.per_page = PerPage::try_from(per_page)?;
            reset_page = true;
        }

        if let Some(sort) = &update.sort {
            next.sort = sort
                .as_ref()
                .filter(|sort| !sort.field.trim().is_empty())
                .map(|sort| SortState::new(sort.field.trim(), sort.order));
            reset_page = true;
        }

        if let Some(filter) = &update.filter {
            let mut normalized = Filter::new();
            for (key, value) in filter {
                let (key, value) = (key.trim(), value.trim());
                if key.is_empty() || value.is_empty() {
                    continue;
                }
                if normalized.insert(key.to_string(), value.to_string()).is_some() {
                    return Err(TypeConstraintError::DuplicateFilterKey(key.to_string()));
                }
            }
            next.filter = normalized;
            reset_page = true;
        }

        if let Some(search) = &update.search {
            next.search = search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            reset_page = true;
        }

        if reset_page && update.page.is_none() {
            next.page = 1;
        }

        Ok(next)
    }

    /// Key/value pairs sent as query parameters to the fetch boundary.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];

        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.field.clone()));
            pairs.push(("order".to_string(), sort.order.to_string()));
        }

        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }

        pairs.extend(
            self.filter
                .iter()
                .map(|(key, value)| (format!("filter_{key}"), value.clone())),
        );

        pairs
    }
}

/// Formats the state as its canonical query string, which doubles as the
/// request key: equal states always produce equal strings.
impl Display for QueryState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let encoded = serde_html_form::to_string(self.query_pairs()).map_err(|_| std::fmt::Error)?;
        f.write_str(&encoded)
    }
}

/// Partial update of a [`QueryState`]. Fields left untouched keep their
/// previous value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryStateUpdate {
    page: Option<u32>,
    per_page: Option<u32>,
    sort: Option<Option<SortState>>,
    filter: Option<Filter>,
    search: Option<Option<String>>,
}

impl QueryStateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(Some(SortState::new(field, order)));
        self
    }

    pub fn clear_sort(mut self) -> Self {
        self.sort = Some(None);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn clear_filter(mut self) -> Self {
        self.filter = Some(Filter::new());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(Some(search.into()));
        self
    }

    pub fn clear_search(mut self) -> Self {
        self.search = Some(None);
        self
    }

    /// `true` when the update would not touch any field.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
