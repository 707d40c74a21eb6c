//! Strongly-typed value objects used by the list-view state layer.
//!
//! These wrappers enforce basic invariants (positive identifiers, supported
//! page sizes, known sort directions) so that once a value reaches a
//! `QueryState` or the selection model it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Page numbers start at one.
    #[error("page must be greater than zero, got {0}")]
    InvalidPage(u32),
    /// Page size outside of the supported set.
    #[error("unsupported page size {0}, expected one of 10, 30, 50, 100")]
    UnsupportedPerPage(u32),
    /// Sort direction other than `asc` or `desc`.
    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),
    /// Two filter keys name the same field once trimmed.
    #[error("duplicate filter key: {0}")]
    DuplicateFilterKey(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(RowId, "Identifier of a list row, used for selection and in-place editing.");

/// Rows that can take part in selection expose their identifier here.
pub trait Identifiable {
    /// Identifier of the row, if the backend provided one.
    fn row_id(&self) -> Option<RowId>;
}

/// Page sizes a list screen may request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum PerPage {
    #[default]
    Ten,
    Thirty,
    Fifty,
    Hundred,
}

impl PerPage {
    /// Every supported page size in ascending order.
    pub const ALL: [PerPage; 4] = [Self::Ten, Self::Thirty, Self::Fifty, Self::Hundred];

    /// Number of rows per page.
    pub const fn get(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Thirty => 30,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PerPage {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|per_page| per_page.get() == value)
            .ok_or(TypeConstraintError::UnsupportedPerPage(value))
    }
}

impl From<PerPage> for u32 {
    fn from(value: PerPage) -> Self {
        value.get()
    }
}

impl Display for PerPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire form sent as the `order` parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TypeConstraintError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
