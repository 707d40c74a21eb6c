use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Identifiable, RowId};

/// Lead row as returned by the CRM list endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Lead {
    #[serde(default)]
    pub id: Option<RowId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Name of the manager the lead is allocated to.
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Identifiable for Lead {
    fn row_id(&self) -> Option<RowId> {
        self.id
    }
}
