//! Fetch boundary: where a [`QueryState`] turns into a page of rows.

use std::future::Future;
use std::pin::Pin;

use crate::domain::query::QueryState;
use crate::domain::response::ResponseEnvelope;
use crate::repository::errors::FetchResult;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::FetchError;

/// Future resolved by a [`ListReader`]. Providers run on a single-threaded
/// event loop, so it does not need to be `Send`.
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = FetchResult<ResponseEnvelope<T>>>>>;

/// Loads one page of `T` for a query state.
///
/// The returned future must not borrow from `self` or `state`: it may be
/// polled after the state has moved on.
pub trait ListReader<T> {
    fn fetch(&self, state: &QueryState) -> FetchFuture<T>;
}

impl<T, R> ListReader<T> for &R
where
    R: ListReader<T> + ?Sized,
{
    fn fetch(&self, state: &QueryState) -> FetchFuture<T> {
        (**self).fetch(state)
    }
}
