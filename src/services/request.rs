use std::cell::RefCell;

use crate::domain::query::{QueryState, QueryStateUpdate};
use crate::services::ServiceResult;

/// Read/write access to the query state of one list screen.
pub trait QueryRequest {
    /// Snapshot of the current state.
    fn state(&self) -> QueryState;

    /// Applies a partial update. Returns whether the state changed.
    fn update_state(&self, update: QueryStateUpdate) -> ServiceResult<bool>;
}

/// Owns the query state of one list screen.
#[derive(Debug, Default)]
pub struct QueryRequestProvider {
    state: RefCell<QueryState>,
}

impl QueryRequestProvider {
    pub fn new(initial: QueryState) -> Self {
        Self {
            state: RefCell::new(initial),
        }
    }
}

impl QueryRequest for QueryRequestProvider {
    fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    fn update_state(&self, update: QueryStateUpdate) -> ServiceResult<bool> {
        let next = self.state.borrow().apply(&update).map_err(|err| {
            log::warn!("Rejected query state update {update:?}: {err}");
            err
        })?;

        let mut state = self.state.borrow_mut();
        if *state == next {
            return Ok(false);
        }
        *state = next;
        Ok(true)
    }
}

/// Stand-in used when a screen renders outside a live list view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopQueryRequest;

impl QueryRequest for NoopQueryRequest {
    fn state(&self) -> QueryState {
        QueryState::default()
    }

    fn update_state(&self, _update: QueryStateUpdate) -> ServiceResult<bool> {
        Ok(false)
    }
}
