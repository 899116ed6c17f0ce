use contracts::domain::a001_merch::{MerchEdit, MerchField};
use contracts::shared::form_settings::MerchTableSettings;
use leptos::prelude::*;

use crate::shared::components::table::clean_currency_input;

/// Ids of the checked rows in the order they were checked
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    /// Check or uncheck `id`. Returns false when it already was in that state.
    pub fn select(&mut self, selected: bool, id: &str) -> bool {
        let present = self.contains(id);
        match (selected, present) {
            (true, false) => {
                self.ids.push(id.to_string());
                true
            }
            (false, true) => {
                self.ids.retain(|selected_id| selected_id != id);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected_id| selected_id == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[derive(Clone, Debug, Default)]
pub struct MerchTableState {
    pub selection: SelectionSet,
}

impl MerchTableState {
    pub fn select_row(&mut self, selected: bool, id: &str) -> bool {
        self.selection.select(selected, id)
    }

    /// Snapshot of the selection in the order the rows were checked
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids().to_vec()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_action_bar_visible(&self) -> bool {
        !self.selection.is_empty()
    }
}

pub fn create_state() -> RwSignal<MerchTableState> {
    RwSignal::new(MerchTableState::default())
}

/// Hand the selected ids to `on_delete`, then clear the selection whatever
/// the parent does with them. Returns how many ids were handed over.
pub fn delete_selected(state: RwSignal<MerchTableState>, on_delete: Callback<Vec<String>>) -> usize {
    let ids = state.with_untracked(|s| s.selected_ids());
    let count = ids.len();
    on_delete.run(ids);
    state.update(|s| s.clear_selection());
    count
}

/// Edit payload for a raw input value. Only the price input is cleaned of
/// its currency formatting, everything else goes to the parent as typed.
pub fn cell_edit(
    index: usize,
    field: MerchField,
    raw: &str,
    settings: &MerchTableSettings,
) -> MerchEdit {
    let value = match field {
        MerchField::Price => {
            clean_currency_input(raw, &settings.currency_prefix, &settings.group_separator)
        }
        _ => raw.to_string(),
    };
    MerchEdit::new(index, value, field)
}

/// Input handler of one cell: each raw value it receives becomes exactly one
/// `on_update` call.
pub fn cell_edit_callback(
    index: usize,
    field: MerchField,
    settings: Signal<MerchTableSettings>,
    on_update: Callback<MerchEdit>,
) -> Callback<String> {
    Callback::new(move |raw: String| {
        let edit = settings.with_untracked(|s| cell_edit(index, field, &raw, s));
        log::debug!("merch row {}: {} = {:?}", edit.index, edit.field, edit.value);
        on_update.run(edit);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording<T: Send + Sync + 'static>() -> (Arc<Mutex<Vec<T>>>, Callback<T>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let callback = Callback::new(move |value: T| sink.lock().unwrap().push(value));
        (calls, callback)
    }

    #[test]
    fn test_select_twice_keeps_one_entry() {
        let mut selection = SelectionSet::default();
        assert!(selection.select(true, "a"));
        assert!(!selection.select(true, "a"));
        assert_eq!(selection.ids(), ["a".to_string()]);
    }

    #[test]
    fn test_deselect_missing_is_noop() {
        let mut selection = SelectionSet::default();
        selection.select(true, "a");
        assert!(!selection.select(false, "b"));
        assert_eq!(selection.len(), 1);

        assert!(selection.select(false, "a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_keeps_order() {
        let mut selection = SelectionSet::default();
        for id in ["c", "a", "b"] {
            selection.select(true, id);
        }
        selection.select(false, "a");
        assert_eq!(selection.ids(), ["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_action_bar_follows_selection() {
        let mut state = MerchTableState::default();
        assert!(!state.is_action_bar_visible());

        state.select_row(true, "x");
        assert!(state.is_action_bar_visible());

        state.clear_selection();
        assert!(!state.is_action_bar_visible());
    }

    #[test]
    fn test_delete_selected_hands_over_then_clears() {
        let owner = Owner::new();
        owner.with(|| {
            let state = create_state();
            state.update(|s| {
                s.select_row(true, "y");
                s.select_row(true, "x");
            });

            // selection size seen by the parent while it handles the delete
            let seen = Arc::new(Mutex::new(Vec::new()));
            let seen_sink = Arc::clone(&seen);
            let on_delete = Callback::new(move |ids: Vec<String>| {
                let still_selected = state.with_untracked(|s| s.selection.len());
                seen_sink.lock().unwrap().push((ids, still_selected));
            });

            assert_eq!(delete_selected(state, on_delete), 2);
            assert_eq!(
                *seen.lock().unwrap(),
                vec![(vec!["y".to_string(), "x".to_string()], 2)]
            );
            assert!(state.with_untracked(|s| s.selection.is_empty()));
            assert!(!state.with_untracked(|s| s.is_action_bar_visible()));
        });
    }

    #[test]
    fn test_delete_with_empty_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let state = create_state();
            let (calls, on_delete) = recording::<Vec<String>>();
            assert_eq!(delete_selected(state, on_delete), 0);
            assert_eq!(*calls.lock().unwrap(), vec![Vec::<String>::new()]);
        });
    }

    #[test]
    fn test_one_input_event_one_update() {
        let owner = Owner::new();
        owner.with(|| {
            let settings = Signal::derive(MerchTableSettings::default);
            let (calls, on_update) = recording::<MerchEdit>();

            let on_input = cell_edit_callback(2, MerchField::Amount, settings, on_update);
            on_input.run("5".to_string());
            assert_eq!(
                *calls.lock().unwrap(),
                vec![MerchEdit::new(2, "5", MerchField::Amount)]
            );

            on_input.run("57".to_string());
            assert_eq!(calls.lock().unwrap().len(), 2);
        });
    }

    #[test]
    fn test_price_input_is_cleaned_before_update() {
        let owner = Owner::new();
        owner.with(|| {
            let settings = Signal::derive(MerchTableSettings::default);
            let (calls, on_update) = recording::<MerchEdit>();

            cell_edit_callback(0, MerchField::Price, settings, on_update).run("$1,234".to_string());
            assert_eq!(
                *calls.lock().unwrap(),
                vec![MerchEdit::new(0, "1234", MerchField::Price)]
            );
        });
    }

    #[test]
    fn test_cell_edit_passes_value_through() {
        let settings = MerchTableSettings::default();
        assert_eq!(
            cell_edit(2, MerchField::Amount, "5", &settings),
            MerchEdit::new(2, "5", MerchField::Amount)
        );
        assert_eq!(
            cell_edit(0, MerchField::Amount, "five", &settings).value,
            "five"
        );
        assert_eq!(
            cell_edit(1, MerchField::Description, " spring ", &settings).value,
            " spring "
        );
    }

    #[test]
    fn test_cell_edit_cleans_price() {
        let settings = MerchTableSettings::default();
        assert_eq!(
            cell_edit(0, MerchField::Price, "$1,234", &settings),
            MerchEdit::new(0, "1234", MerchField::Price)
        );
    }
}
