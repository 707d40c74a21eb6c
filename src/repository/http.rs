//! HTTP implementation of the fetch boundary.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::query::QueryState;
use crate::domain::response::ResponseEnvelope;
use crate::models::config::{ListViewConfig, RequestMode};
use crate::repository::errors::{FetchError, FetchResult};
use crate::repository::{FetchFuture, ListReader};

/// Fetches pages of `T` from one REST list endpoint.
#[derive(Clone)]
pub struct HttpListReader<T> {
    client: Client,
    url: String,
    mode: RequestMode,
    _rows: PhantomData<fn() -> T>,
}

impl<T> HttpListReader<T> {
    /// Builds a reader for `resource` below the configured API base URL.
    pub fn new(config: &ListViewConfig, resource: &str) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .build()?;

        Ok(Self {
            client,
            url: config.resource_url(resource),
            mode: config.request_mode,
            _rows: PhantomData,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<T> ListReader<T> for HttpListReader<T>
where
    T: DeserializeOwned + 'static,
{
    fn fetch(&self, state: &QueryState) -> FetchFuture<T> {
        let request = match self.mode {
            RequestMode::Query => self.client.get(&self.url).query(&state.query_pairs()),
            RequestMode::Json => self.client.post(&self.url).json(state),
        };
        log::debug!("Fetching {} with {state}", self.url);

        Box::pin(async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;

            // Error statuses may still carry an envelope with the server message.
            match serde_json::from_str::<ResponseEnvelope<T>>(&body) {
                Ok(envelope) => Ok(envelope),
                Err(_) if !status.is_success() => Err(FetchError::Status(status.as_u16())),
                Err(err) => Err(FetchError::from(err)),
            }
        })
    }
}
