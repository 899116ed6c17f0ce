//! Editable table of merch records for one direction (in or out).
//!
//! The table owns nothing but the row selection. Every change to the records
//! goes to the parent through the callbacks and comes back through `merch`.

mod editable_cell;
mod row;
pub mod state;

use self::row::MerchRow;
use self::state::{create_state, delete_selected};
use crate::shared::i18n::{selected_items, tr, TextKey};
use crate::shared::icons::icon;
use crate::shared::settings::use_settings;
use contracts::domain::a001_merch::{Merch, MerchEdit, MerchField};
use contracts::domain::a002_item::Item;
use contracts::enums::MerchDirection;
use leptos::prelude::*;
use thaw::*;

pub use self::editable_cell::{CellInput, EditableCell};

#[component]
pub fn MerchTable(
    direction: MerchDirection,
    /// Records in display order
    #[prop(into)]
    merch: Signal<Vec<Merch>>,
    /// Catalog used for expected sales and item name suggestions
    #[prop(optional, into)]
    items: Option<Signal<Vec<Item>>>,
    on_update: Callback<MerchEdit>,
    on_add: Callback<()>,
    /// Receives the ids of the selected rows
    on_delete: Callback<Vec<String>>,
) -> impl IntoView {
    let settings = use_settings();
    let locale = Signal::derive(move || settings.with(|s| s.locale));
    let items = items.unwrap_or_else(|| Signal::derive(Vec::new));
    let state = create_state();

    let table_id = format!("a001-merch-{}-table", direction.code());
    let items_list_id = format!("a001-merch-{}-items", direction.code());

    let select_row = Callback::new(move |(id, selected): (String, bool)| {
        if state.try_update(|s| s.select_row(selected, &id)) == Some(true) {
            log::debug!("merch {}: row {} selected={}", direction, id, selected);
        }
    });

    let delete_rows = move |_: leptos::ev::MouseEvent| {
        let count = delete_selected(state, on_delete);
        log::info!("merch {}: deleting {} row(s)", direction, count);
    };

    let add_merch = move |_: leptos::ev::MouseEvent| {
        log::info!("merch {}: adding row", direction);
        on_add.run(());
    };

    // (index, id) pairs: an edit keeps the key, a removal re-renders the rows after it
    let row_keys = move || {
        merch.with(|rows| {
            rows.iter()
                .enumerate()
                .map(|(idx, row)| (idx, row.id_string()))
                .collect::<Vec<_>>()
        })
    };

    let header_cells = MerchField::all()
        .into_iter()
        .map(|field| {
            view! {
                <TableHeaderCell>{move || tr(locale.get(), TextKey::field(field))}</TableHeaderCell>
            }
        })
        .collect_view();

    view! {
        <div class="merch-input-container">
            <Show when=move || state.with(|s| s.is_action_bar_visible())>
                <div class="actions" style="margin-bottom: 1rem;">
                    <p>{move || selected_items(locale.get(), state.with(|s| s.selection.len()))}</p>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=delete_rows
                        attr:class="button--danger"
                        attr:style="width: 120px;"
                    >
                        "🗑️ "
                        {move || tr(locale.get(), TextKey::Delete)}
                    </Button>
                </div>
            </Show>

            <div class="header-space">
                <h2>
                    {icon(match direction {
                        MerchDirection::In => "merch-in",
                        MerchDirection::Out => "merch-out",
                    })}
                    " "
                    {move || tr(locale.get(), TextKey::title(direction))}
                </h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=add_merch
                >
                    {icon("plus")}
                    {move || tr(locale.get(), TextKey::AddMerch)}
                </Button>
            </div>

            <datalist id=items_list_id.clone()>
                {move || items.get().into_iter().map(|item| view! { <option value=item.name /> }).collect_view()}
            </datalist>

            <div class="merch-table table-wrapper">
                <Table attr:id=table_id attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            <TableHeaderCell>
                                {move || tr(locale.get(), TextKey::derived_column(direction))}
                            </TableHeaderCell>
                            <TableHeaderCell class="selection">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=row_keys
                            key=|key| key.clone()
                            children=move |(index, item_id)| {
                                let checked_id = item_id.clone();
                                let checked = Signal::derive(move || {
                                    checked_id
                                        .as_deref()
                                        .map(|id| state.with(|s| s.selection.contains(id)))
                                        .unwrap_or(false)
                                });
                                let row = Signal::derive(move || {
                                    merch.with(|rows| rows.get(index).cloned().unwrap_or_default())
                                });
                                view! {
                                    <MerchRow
                                        index=index
                                        item_id=item_id
                                        row=row
                                        items=items
                                        direction=direction
                                        checked=checked
                                        items_list_id=items_list_id.clone()
                                        on_select=select_row
                                        on_update=on_update
                                    />
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
