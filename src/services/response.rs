//! Fetch orchestration: turns the current query state into a response,
//! deduplicating identical in-flight requests and discarding responses for
//! superseded states.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::response::ResponseEnvelope;
use crate::repository::ListReader;
use crate::repository::errors::FetchError;
use crate::services::ServiceResult;
use crate::services::request::{QueryRequest, QueryRequestProvider};

/// What a fetch call ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was published to consumers.
    Applied,
    /// A request for the same state was already in flight.
    InFlight,
    /// A newer request was issued meanwhile; this result was dropped.
    Discarded,
    /// The state has not changed since the last request.
    Unchanged,
}

/// Read access to the fetch lifecycle of one list screen.
#[allow(async_fn_in_trait)]
pub trait QueryResponse<T> {
    /// Last successful response, kept across failed refreshes.
    fn response(&self) -> Option<Rc<ResponseEnvelope<T>>>;

    /// `true` between issuing a request and the resolution of the latest one.
    fn is_loading(&self) -> bool;

    /// Request key of the most recently issued request.
    fn query(&self) -> String;

    /// Error of the latest resolved request, if it failed.
    fn last_error(&self) -> Option<FetchError>;

    /// Fetches the current state again.
    async fn refetch(&self) -> ServiceResult<FetchOutcome>;
}

struct FetchState<T> {
    generation: u64,
    in_flight: Option<String>,
    query: Option<String>,
    response: Option<Rc<ResponseEnvelope<T>>>,
    error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            in_flight: None,
            query: None,
            response: None,
            error: None,
        }
    }
}

/// Clears the in-flight marker of a request whose future is dropped before it
/// resolves, unless a newer request has taken over.
struct InFlightGuard<'a, T> {
    state: &'a RefCell<FetchState<T>>,
    generation: u64,
}

impl<T> Drop for InFlightGuard<'_, T> {
    fn drop(&mut self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        if state.generation == self.generation && state.in_flight.is_some() {
            log::debug!("Fetch abandoned before completion");
            state.in_flight = None;
            state.query = None;
        }
    }
}

/// Orchestrates fetches for one list screen.
pub struct QueryResponseProvider<T, R> {
    request: Rc<QueryRequestProvider>,
    reader: R,
    state: RefCell<FetchState<T>>,
}

impl<T, R> QueryResponseProvider<T, R>
where
    R: ListReader<T>,
{
    pub fn new(request: Rc<QueryRequestProvider>, reader: R) -> Self {
        Self {
            request,
            reader,
            state: RefCell::new(FetchState::default()),
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Fetches only when the query state moved away from the last request.
    pub async fn sync(&self) -> ServiceResult<FetchOutcome> {
        let key = self.request.state().to_string();
        if self.state.borrow().query.as_deref() == Some(key.as_str()) {
            return Ok(FetchOutcome::Unchanged);
        }
        self.refetch().await
    }

    /// Fetches the current query state.
    ///
    /// Only the latest issued request may publish its outcome; earlier ones
    /// resolve to [`FetchOutcome::Discarded`] whatever their result. Dropping
    /// the returned future before it resolves ends the loading state it
    /// started and forgets its key, so the next [`Self::sync`] fetches again.
    pub async fn refetch(&self) -> ServiceResult<FetchOutcome> {
        let query_state = self.request.state();
        let key = query_state.to_string();

        let generation = {
            let mut state = self.state.borrow_mut();
            if state.in_flight.as_deref() == Some(key.as_str()) {
                log::debug!("Request for {key} already in flight");
                return Ok(FetchOutcome::InFlight);
            }
            state.generation += 1;
            state.in_flight = Some(key.clone());
            state.query = Some(key.clone());
            state.generation
        };

        let _guard = InFlightGuard {
            state: &self.state,
            generation,
        };
        let result = self.reader.fetch(&query_state).await;

        let mut state = self.state.borrow_mut();
        if state.generation != generation {
            log::debug!("Discarding stale response for {key}");
            return Ok(FetchOutcome::Discarded);
        }
        state.in_flight = None;

        let error = match result {
            Ok(envelope) if envelope.result => {
                state.response = Some(Rc::new(envelope));
                state.error = None;
                return Ok(FetchOutcome::Applied);
            }
            Ok(envelope) => FetchError::rejected(envelope.message, envelope.errors),
            Err(err) => err,
        };

        log::error!("Failed to fetch {key}: {error}");
        state.error = Some(error.clone());
        Err(error.into())
    }
}

impl<T, R> QueryResponse<T> for QueryResponseProvider<T, R>
where
    R: ListReader<T>,
{
    fn response(&self) -> Option<Rc<ResponseEnvelope<T>>> {
        self.state.borrow().response.clone()
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().in_flight.is_some()
    }

    fn query(&self) -> String {
        self.state.borrow().query.clone().unwrap_or_default()
    }

    fn last_error(&self) -> Option<FetchError> {
        self.state.borrow().error.clone()
    }

    async fn refetch(&self) -> ServiceResult<FetchOutcome> {
        QueryResponseProvider::refetch(self).await
    }
}

/// Stand-in used when a screen renders outside a live list view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopQueryResponse;

impl<T> QueryResponse<T> for NoopQueryResponse {
    fn response(&self) -> Option<Rc<ResponseEnvelope<T>>> {
        None
    }

    fn is_loading(&self) -> bool {
        false
    }

    fn query(&self) -> String {
        String::new()
    }

    fn last_error(&self) -> Option<FetchError> {
        None
    }

    async fn refetch(&self) -> ServiceResult<FetchOutcome> {
        Ok(FetchOutcome::Unchanged)
    }
}
