//! In-memory owner of a merch list: the parent side of `MerchTable`.

use chrono::Utc;
use contracts::domain::a001_merch::{
    apply_edit, remove_by_ids, Merch, MerchEdit, MerchEditError, MerchId,
};
use contracts::enums::MerchDirection;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MerchStore {
    pub direction: MerchDirection,
    pub merch: RwSignal<Vec<Merch>>,
    /// Outcome of the latest edit of this list
    pub error: RwSignal<Option<MerchEditError>>,
}

impl MerchStore {
    pub fn new(direction: MerchDirection, initial: Vec<Merch>) -> Self {
        Self {
            direction,
            merch: RwSignal::new(initial),
            error: RwSignal::new(None),
        }
    }

    /// Coerce and store one cell edit; the list is unchanged on error
    pub fn update(&self, edit: MerchEdit) -> Result<(), MerchEditError> {
        let result = self
            .merch
            .try_update(|rows| apply_edit(rows, &edit))
            .unwrap_or(Err(MerchEditError::RowNotFound { index: edit.index }));
        if let Err(e) = &result {
            log::warn!("merch {}: edit of row {} rejected: {}", self.direction, edit.index, e);
        }
        self.error.set(result.clone().err());
        result
    }

    /// Append a blank record dated today
    pub fn add(&self) -> MerchId {
        let id = MerchId::generate();
        let today = Utc::now().date_naive();
        self.merch.update(|rows| rows.push(Merch::new(id, today)));
        log::info!("merch {}: added {}", self.direction, id.0);
        id
    }

    pub fn delete(&self, ids: &[String]) -> usize {
        let removed = self
            .merch
            .try_update(|rows| remove_by_ids(rows, ids))
            .unwrap_or(0);
        log::info!("merch {}: removed {} of {} requested", self.direction, removed, ids.len());
        removed
    }
}
