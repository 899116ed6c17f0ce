//! Row selection checkbox inside a table cell
//!
//! # Examples
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.id_string()
//!     checked=Signal::derive(move || selection.get().contains(&id))
//!     on_change=Callback::new(move |(id, checked)| select_row(checked, id))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Checkbox cell of a selectable row
///
/// - stops click propagation so the row itself does not react
/// - rows without an id (not persisted yet) render a disabled checkbox
#[component]
pub fn TableCellCheckbox(
    /// ID of the row, `None` until it is persisted
    #[prop(into)]
    item_id: Option<String>,

    #[prop(into)]
    checked: Signal<bool>,

    /// Called with (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let disabled = item_id.is_none();

    view! {
        <TableCell class="selection" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox table__checkbox--danger"
                prop:checked=move || checked.get()
                prop:disabled=disabled
                on:change=move |ev| {
                    if let Some(id) = item_id.clone() {
                        on_change.run((id, event_target_checked(&ev)));
                    }
                }
            />
        </TableCell>
    }
}
