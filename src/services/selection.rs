use std::cell::RefCell;
use std::collections::HashSet;

use crate::domain::selection::{ItemIdUpdate, SelectionState};
use crate::domain::types::RowId;

/// Row selection of one list screen. `loaded` is the identifier list of the
/// page currently shown, so select-all is scoped to the visible page.
pub trait ListSelection {
    /// Identifiers of the selected rows.
    fn selected(&self) -> HashSet<RowId>;

    /// Toggles one row. `None` and a disabled selection are no-ops.
    fn on_select(&self, id: Option<RowId>);

    /// Deselects the loaded page when all of it is selected, selects the
    /// whole page otherwise.
    fn on_select_all(&self, loaded: &[RowId]);

    /// Empties the selection, even while disabled.
    fn clear_selected(&self);

    /// Row currently open for in-place editing.
    fn item_id_for_update(&self) -> Option<RowId>;

    /// Replaces or recomputes the row open for editing.
    fn set_item_id_for_update(&self, update: ItemIdUpdate);

    /// `true` when `loaded` is non-empty and every id in it is selected.
    fn is_all_selected(&self, loaded: &[RowId]) -> bool;

    /// `true` while a bulk action blocks toggling.
    fn is_disabled(&self) -> bool;
}

/// Owns the selection of one list screen.
#[derive(Debug, Default)]
pub struct SelectionProvider {
    state: RefCell<SelectionState>,
}

impl SelectionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks or re-enables selection changes, e.g. around a bulk action.
    pub fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().set_disabled(disabled);
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.state.borrow().is_selected(id)
    }

    /// Identifiers ordered ascending, for stable bulk-action payloads.
    pub fn selected_sorted(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.state.borrow().selected().iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl ListSelection for SelectionProvider {
    fn selected(&self) -> HashSet<RowId> {
        self.state.borrow().selected().clone()
    }

    fn on_select(&self, id: Option<RowId>) {
        if !self.state.borrow_mut().toggle(id) {
            log::debug!("Selection of {id:?} ignored");
        }
    }

    fn on_select_all(&self, loaded: &[RowId]) {
        if !self.state.borrow_mut().toggle_all(loaded) {
            log::debug!("Select all ignored for {} loaded rows", loaded.len());
        }
    }

    fn clear_selected(&self) {
        self.state.borrow_mut().clear();
    }

    fn item_id_for_update(&self) -> Option<RowId> {
        self.state.borrow().item_id_for_update()
    }

    fn set_item_id_for_update(&self, update: ItemIdUpdate) {
        self.state.borrow_mut().set_item_id_for_update(update);
    }

    fn is_all_selected(&self, loaded: &[RowId]) -> bool {
        self.state.borrow().is_all_selected(loaded)
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().is_disabled()
    }
}

/// Stand-in used when a screen renders outside a live list view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListSelection;

impl ListSelection for NoopListSelection {
    fn selected(&self) -> HashSet<RowId> {
        HashSet::new()
    }

    fn on_select(&self, _id: Option<RowId>) {}

    fn on_select_all(&self, _loaded: &[RowId]) {}

    fn clear_selected(&self) {}

    fn item_id_for_update(&self) -> Option<RowId> {
        None
    }

    fn set_item_id_for_update(&self, _update: ItemIdUpdate) {}

    fn is_all_selected(&self, _loaded: &[RowId]) -> bool {
        false
    }

    fn is_disabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<RowId> {
        raw.iter().map(|&id| RowId::new(id).unwrap()).collect()
    }

    fn header_checkbox<S: ListSelection>(selection: &S, loaded: &[RowId]) -> &'static str {
        if selection.is_all_selected(loaded) {
            "checked"
        } else {
            "unchecked"
        }
    }

    #[test]
    fn select_all_scenario() {
        let loaded = ids(&[1, 2, 3]);
        let selection = SelectionProvider::new();

        selection.on_select_all(&loaded);
        assert_eq!(
            selection.selected(),
            loaded.iter().copied().collect::<HashSet<_>>()
        );
        assert!(selection.is_all_selected(&loaded));

        selection.on_select_all(&loaded);
        assert!(selection.selected().is_empty());
        assert!(!selection.is_all_selected(&loaded));
    }

    #[test]
    fn clear_is_allowed_while_disabled() {
        let loaded = ids(&[4, 5]);
        let selection = SelectionProvider::new();
        selection.on_select_all(&loaded);
        selection.set_disabled(true);

        selection.on_select(Some(loaded[0]));
        assert!(selection.is_selected(loaded[0]));

        selection.clear_selected();
        assert!(selection.selected().is_empty());
        assert!(selection.is_disabled());
    }

    #[test]
    fn selected_sorted_is_ordered() {
        let selection = SelectionProvider::new();
        for id in ids(&[9, 2, 5]) {
            selection.on_select(Some(id));
        }
        assert_eq!(selection.selected_sorted(), ids(&[2, 5, 9]));
    }

    #[test]
    fn noop_selection_renders_unchecked() {
        let loaded = ids(&[1]);
        let selection = NoopListSelection;

        selection.on_select_all(&loaded);

        assert_eq!(header_checkbox(&selection, &loaded), "unchecked");
        assert!(selection.selected().is_empty());
    }
}
