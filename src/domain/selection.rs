//! Row selection state of a list screen.
//!
//! Selection is keyed by [`RowId`], never by row position, so it survives
//! refetches and re-sorting of the same logical rows.

use std::collections::HashSet;

use crate::domain::types::RowId;

/// New value for the row currently open for in-place editing.
pub enum ItemIdUpdate {
    /// Replace the current value.
    Value(Option<RowId>),
    /// Compute the next value from the prior one.
    Update(Box<dyn FnOnce(Option<RowId>) -> Option<RowId>>),
}

impl ItemIdUpdate {
    pub fn with(update: impl FnOnce(Option<RowId>) -> Option<RowId> + 'static) -> Self {
        Self::Update(Box::new(update))
    }

    fn resolve(self, prior: Option<RowId>) -> Option<RowId> {
        match self {
            Self::Value(value) => value,
            Self::Update(update) => update(prior),
        }
    }
}

impl From<Option<RowId>> for ItemIdUpdate {
    fn from(value: Option<RowId>) -> Self {
        Self::Value(value)
    }
}

impl From<RowId> for ItemIdUpdate {
    fn from(value: RowId) -> Self {
        Self::Value(Some(value))
    }
}

/// Selected rows, the row being edited and the bulk-action switch.
///
/// `disabled` blocks [`SelectionState::toggle`] and
/// [`SelectionState::toggle_all`]; clearing and the edit target are always
/// allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashSet<RowId>,
    item_id_for_update: Option<RowId>,
    disabled: bool,
}

impl SelectionState {
    pub fn selected(&self) -> &HashSet<RowId> {
        &self.selected
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    pub fn item_id_for_update(&self) -> Option<RowId> {
        self.item_id_for_update
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Toggles membership of `id`. Returns whether anything changed.
    pub fn toggle(&mut self, id: Option<RowId>) -> bool {
        let Some(id) = id else {
            return false;
        };
        if self.disabled {
            return false;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Selects every loaded row, or unselects them all when they already are.
    pub fn toggle_all(&mut self, loaded: &[RowId]) -> bool {
        if self.disabled || loaded.is_empty() {
            return false;
        }
        if self.is_all_selected(loaded) {
            for id in loaded {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(loaded.iter().copied());
        }
        true
    }

    /// `true` when the loaded page is non-empty and every row on it is selected.
    pub fn is_all_selected(&self, loaded: &[RowId]) -> bool {
        !loaded.is_empty() && loaded.iter().all(|id| self.selected.contains(id))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn set_item_id_for_update(&mut self, update: ItemIdUpdate) {
        self.item_id_for_update = update.resolve(self.item_id_for_update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<RowId> {
        raw.iter().map(|&id| RowId::new(id).unwrap()).collect()
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let id = RowId::new(5).unwrap();
        let mut state = SelectionState::default();

        state.toggle(Some(id));
        assert!(state.is_selected(id));
        state.toggle(Some(id));
        assert!(!state.is_selected(id));
    }

    #[test]
    fn toggle_ignores_missing_identifier() {
        let mut state = SelectionState::default();
        assert!(!state.toggle(None));
        assert!(state.selected().is_empty());
    }

    #[test]
    fn toggle_all_only_touches_loaded_rows() {
        let mut state = SelectionState::default();
        let other_page = RowId::new(40).unwrap();
        state.toggle(Some(other_page));

        let loaded = ids(&[1, 2, 3]);
        state.toggle_all(&loaded);
        assert!(state.is_all_selected(&loaded));
        assert_eq!(state.selected().len(), 4);

        state.toggle_all(&loaded);
        assert!(!state.is_all_selected(&loaded));
        assert_eq!(state.selected().len(), 1);
        assert!(state.is_selected(other_page));
    }

    #[test]
    fn partially_selected_page_gets_completed() {
        let loaded = ids(&[1, 2, 3]);
        let mut state = SelectionState::default();
        state.toggle(Some(loaded[1]));

        state.toggle_all(&loaded);

        assert!(state.is_all_selected(&loaded));
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        let state = SelectionState::default();
        assert!(!state.is_all_selected(&[]));
    }

    #[test]
    fn disabled_blocks_toggles_but_not_clear() {
        let loaded = ids(&[1, 2]);
        let mut state = SelectionState::default();
        state.toggle_all(&loaded);
        state.set_disabled(true);

        assert!(!state.toggle(Some(loaded[0])));
        assert!(!state.toggle_all(&loaded));
        assert_eq!(state.selected().len(), 2);

        state.clear();
        assert!(state.selected().is_empty());
    }

    #[test]
    fn item_id_for_update_accepts_values_and_functions() {
        let id = RowId::new(3).unwrap();
        let mut state = SelectionState::default();

        state.set_item_id_for_update(id.into());
        assert_eq!(state.item_id_for_update(), Some(id));

        let toggle = move |prior: Option<RowId>| if prior == Some(id) { None } else { Some(id) };
        state.set_item_id_for_update(ItemIdUpdate::with(toggle));
        assert_eq!(state.item_id_for_update(), None);
        state.set_item_id_for_update(ItemIdUpdate::with(toggle));
        assert_eq!(state.item_id_for_update(), Some(id));

        state.set_item_id_for_update(ItemIdUpdate::Value(None));
        assert_eq!(state.item_id_for_update(), None);
    }
}
