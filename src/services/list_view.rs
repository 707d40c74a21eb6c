//! The three providers of one list screen wired together.

use std::rc::Rc;

use crate::domain::query::{QueryState, QueryStateUpdate};
use crate::domain::selection::ItemIdUpdate;
use crate::domain::types::{Identifiable, RowId};
use crate::repository::ListReader;
use crate::services::ServiceResult;
use crate::services::request::{QueryRequest, QueryRequestProvider};
use crate::services::response::{FetchOutcome, QueryResponse, QueryResponseProvider};
use crate::services::selection::{ListSelection, SelectionProvider};

/// Query state, fetch lifecycle and selection of one list screen.
///
/// Constructed once per screen and handed down to its components; each
/// component depends only on the provider trait it needs.
pub struct ListView<T, R> {
    request: Rc<QueryRequestProvider>,
    response: QueryResponseProvider<T, R>,
    selection: SelectionProvider,
}

impl<T, R> ListView<T, R>
where
    T: Identifiable,
    R: ListReader<T>,
{
    pub fn new(reader: R) -> Self {
        Self::with_state(QueryState::default(), reader)
    }

    pub fn with_state(initial: QueryState, reader: R) -> Self {
        let request = Rc::new(QueryRequestProvider::new(initial));
        let response = QueryResponseProvider::new(Rc::clone(&request), reader);

        Self {
            request,
            response,
            selection: SelectionProvider::new(),
        }
    }

    pub fn request(&self) -> &QueryRequestProvider {
        &self.request
    }

    pub fn response(&self) -> &QueryResponseProvider<T, R> {
        &self.response
    }

    pub fn selection(&self) -> &SelectionProvider {
        &self.selection
    }

    pub fn state(&self) -> QueryState {
        self.request.state()
    }

    /// Applies `update` and fetches the resulting state if it changed.
    pub async fn update_state(&self, update: QueryStateUpdate) -> ServiceResult<FetchOutcome> {
        self.request.update_state(update)?;
        self.response.sync().await
    }

    pub async fn refetch(&self) -> ServiceResult<FetchOutcome> {
        self.response.refetch().await
    }

    /// Identifiers of the rows on the currently loaded page.
    pub fn loaded_ids(&self) -> Vec<RowId> {
        self.response
            .response()
            .map(|envelope| envelope.row_ids())
            .unwrap_or_default()
    }

    pub fn on_select(&self, id: Option<RowId>) {
        self.selection.on_select(id);
    }

    /// Toggles every row of the loaded page.
    pub fn on_select_all(&self) {
        self.selection.on_select_all(&self.loaded_ids());
    }

    /// Every row of the loaded page is selected.
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.loaded_ids())
    }

    pub fn clear_selected(&self) {
        self.selection.clear_selected();
    }

    pub fn set_item_id_for_update(&self, update: impl Into<ItemIdUpdate>) {
        self.selection.set_item_id_for_update(update.into());
    }
}
