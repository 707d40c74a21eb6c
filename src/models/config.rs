//! Configuration model loaded from external sources.

use std::path::Path;

use config::Config;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::query::QueryState;
use crate::domain::types::{PerPage, TypeConstraintError};

/// How the query state travels to the list endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// `GET` with the state encoded as query parameters.
    #[default]
    Query,
    /// `POST` with the state as a JSON body.
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid list defaults: {0}")]
    Defaults(#[from] TypeConstraintError),
}

fn default_per_page() -> u32 {
    PerPage::default().get()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the list backend client.
pub struct ListViewConfig {
    #[validate(url)]
    pub api_base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub request_mode: RequestMode,
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl ListViewConfig {
    /// Reads `<dir>/default.yaml`, the optional `<dir>/<app_env>.yaml` and
    /// `APP_*` environment variables, in increasing priority.
    pub fn load(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(config::File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(
                config::File::with_name(&dir.join(app_env).to_string_lossy()).required(false),
            )
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        let config = settings.try_deserialize::<ListViewConfig>()?;
        config.validate()?;
        PerPage::try_from(config.per_page)?;

        Ok(config)
    }

    /// Query state a freshly mounted list view starts from.
    pub fn initial_state(&self) -> Result<QueryState, TypeConstraintError> {
        Ok(QueryState::with_per_page(PerPage::try_from(self.per_page)?))
    }

    /// Endpoint URL of a list resource, e.g. `leads`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}
