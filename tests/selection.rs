use std::collections::HashSet;

use pushkind_listview::domain::lead::Lead;
use pushkind_listview::domain::selection::ItemIdUpdate;
use pushkind_listview::domain::types::RowId;
use pushkind_listview::services::list_view::ListView;
use pushkind_listview::services::request::{NoopQueryRequest, QueryRequest};
use pushkind_listview::services::response::{NoopQueryResponse, QueryResponse};
use pushkind_listview::services::selection::{ListSelection, NoopListSelection, SelectionProvider};

mod common;

use common::{ScriptedReader, ids, page_of};

/// Header checkbox state as a table component would compute it.
fn header_checked<S: ListSelection>(selection: &S, loaded: &[RowId]) -> bool {
    !loaded.is_empty() && selection.is_all_selected(loaded)
}

/// Count shown next to the bulk-action buttons.
fn selected_count<S: ListSelection>(selection: &S) -> usize {
    selection.selected().len()
}

fn rows_shown<R: QueryResponse<Lead>>(response: &R) -> usize {
    response
        .response()
        .map(|envelope| envelope.data.len())
        .unwrap_or(0)
}

#[test]
fn toggling_twice_restores_selection() {
    let selection = SelectionProvider::new();
    let id = ids(&[7])[0];
    selection.on_select(Some(ids(&[1])[0]));
    let before = selection.selected();

    selection.on_select(Some(id));
    assert!(selection.selected().contains(&id));
    selection.on_select(Some(id));

    assert_eq!(selection.selected(), before);
}

#[test]
fn selecting_nothing_changes_nothing() {
    let selection = SelectionProvider::new();
    selection.on_select(Some(ids(&[3])[0]));

    selection.on_select(None);

    assert_eq!(selection.selected_sorted(), ids(&[3]));
}

#[test]
fn select_all_toggles_the_visible_page() {
    let loaded = ids(&[1, 2, 3]);
    let selection = SelectionProvider::new();

    selection.on_select_all(&loaded);
    assert_eq!(
        selection.selected(),
        loaded.iter().copied().collect::<HashSet<_>>()
    );
    assert!(header_checked(&selection, &loaded));

    selection.on_select_all(&loaded);
    assert!(selection.selected().is_empty());
    assert!(!header_checked(&selection, &loaded));
}

#[test]
fn select_all_completes_a_partial_selection() {
    let loaded = ids(&[1, 2, 3]);
    let selection = SelectionProvider::new();
    selection.on_select(Some(loaded[1]));

    selection.on_select_all(&loaded);

    assert_eq!(selection.selected_sorted(), loaded);
}

#[test]
fn select_all_keeps_rows_from_other_pages() {
    let selection = SelectionProvider::new();
    selection.on_select_all(&ids(&[1, 2]));

    selection.on_select_all(&ids(&[3, 4]));
    selection.on_select_all(&ids(&[3, 4]));

    assert_eq!(selection.selected_sorted(), ids(&[1, 2]));
}

#[test]
fn empty_page_is_never_all_selected() {
    let selection = SelectionProvider::new();

    selection.on_select_all(&[]);

    assert!(!selection.is_all_selected(&[]));
    assert_eq!(selected_count(&selection), 0);
}

#[test]
fn disabled_selection_still_clears() {
    let loaded = ids(&[4, 5]);
    let selection = SelectionProvider::new();
    selection.on_select_all(&loaded);
    selection.set_disabled(true);

    selection.on_select(Some(loaded[0]));
    selection.on_select_all(&loaded);
    assert_eq!(selected_count(&selection), 2);

    selection.clear_selected();
    assert_eq!(selected_count(&selection), 0);
}

#[test]
fn item_id_for_update_accepts_values_and_functions() {
    let selection = SelectionProvider::new();
    let first = ids(&[10])[0];

    selection.set_item_id_for_update(first.into());
    assert_eq!(selection.item_id_for_update(), Some(first));

    selection.set_item_id_for_update(ItemIdUpdate::with(|prior| {
        prior.and_then(|id| RowId::new(id.get() + 1).ok())
    }));
    assert_eq!(selection.item_id_for_update(), Some(ids(&[11])[0]));

    selection.set_item_id_for_update(ItemIdUpdate::Value(None));
    assert_eq!(selection.item_id_for_update(), None);
}

#[tokio::test]
async fn null_objects_render_an_empty_screen() {
    let request = NoopQueryRequest;
    let response = NoopQueryResponse;
    let selection = NoopListSelection;
    let loaded = ids(&[1, 2]);

    assert_eq!(request.update_state(Default::default()), Ok(false));
    assert_eq!(request.state().page(), 1);
    assert_eq!(rows_shown(&response), 0);
    assert!(!QueryResponse::<Lead>::is_loading(&response));

    selection.on_select_all(&loaded);
    assert!(!header_checked(&selection, &loaded));
    assert_eq!(selected_count(&selection), 0);
}

#[tokio::test]
async fn list_view_selection_tracks_loaded_rows() {
    let reader = ScriptedReader::new();
    reader.ready(page_of(&[1, 2, 3]));
    let view = ListView::new(reader);
    view.refetch().await.unwrap();

    view.on_select(Some(ids(&[2])[0]));
    assert!(!view.is_all_selected());
    assert_eq!(rows_shown(view.response()), 3);

    view.on_select_all();
    assert!(view.is_all_selected());
    assert!(header_checked(view.selection(), &view.loaded_ids()));

    view.clear_selected();
    assert_eq!(selected_count(view.selection()), 0);
}
