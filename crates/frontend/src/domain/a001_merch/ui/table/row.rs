use super::editable_cell::{CellInput, EditableCell};
use super::state::cell_edit_callback;
use crate::shared::components::table::{format_currency, TableCellCheckbox, TableCellMoney};
use crate::shared::settings::use_settings;
use contracts::domain::a001_merch::{Merch, MerchEdit, MerchField, MerchTotals, MAX_AMOUNT};
use contracts::domain::a002_item::Item;
use contracts::enums::MerchDirection;
use leptos::prelude::*;
use thaw::*;

/// One merch record rendered as editable cells
#[component]
pub fn MerchRow(
    /// Position of the record in the parent's list
    index: usize,
    item_id: Option<String>,
    #[prop(into)]
    row: Signal<Merch>,
    #[prop(into)]
    items: Signal<Vec<Item>>,
    direction: MerchDirection,
    #[prop(into)]
    checked: Signal<bool>,
    /// Datalist with catalog item names
    #[prop(into)]
    items_list_id: String,
    on_select: Callback<(String, bool)>,
    on_update: Callback<MerchEdit>,
) -> impl IntoView {
    let settings = use_settings();

    let edit = move |field: MerchField| cell_edit_callback(index, field, settings, on_update);

    let value = move |field: MerchField| Signal::derive(move || row.with(|r| r.field_value(field)));

    let price_text = Signal::derive(move || {
        let price = row.with(|r| r.price);
        if price == 0.0 {
            String::new()
        } else {
            settings.with(|s| format_currency(price, &s.currency_prefix, &s.group_separator))
        }
    });

    let totals = Memo::new(move |_| items.with(|items| row.with(|r| MerchTotals::for_row(r, items))));
    let spent = Signal::derive(move || totals.get().spent);

    let row_class = if item_id.is_some() {
        "has-id highlightable"
    } else {
        "no-id highlightable"
    };

    let checkbox_id = item_id.clone();

    view! {
        <TableRow class=row_class>
            <EditableCell
                value=value(MerchField::Description)
                preview=value(MerchField::Description)
                input=CellInput::Text
                on_change=edit(MerchField::Description)
            />
            <EditableCell
                value=value(MerchField::ItemName)
                preview=value(MerchField::ItemName)
                input=CellInput::Text
                class="name"
                list=items_list_id
                on_change=edit(MerchField::ItemName)
            />
            <EditableCell
                value=price_text
                preview=price_text
                input=CellInput::Currency
                class="price"
                on_change=edit(MerchField::Price)
            />
            <EditableCell
                value=value(MerchField::Amount)
                preview=value(MerchField::Amount)
                input=CellInput::Number { max: MAX_AMOUNT }
                class="amount"
                on_change=edit(MerchField::Amount)
            />
            <EditableCell
                value=value(MerchField::Date)
                preview=value(MerchField::Date)
                input=CellInput::Date
                class="date"
                on_change=edit(MerchField::Date)
            />
            {match direction {
                MerchDirection::In => view! { <TableCellMoney value=spent /> }.into_any(),
                MerchDirection::Out => view! {
                    <TableCellMoney
                        value=spent
                        expected=Signal::derive(move || totals.get().expected_sales)
                    />
                }.into_any(),
            }}
            <TableCellCheckbox item_id=checkbox_id checked=checked on_change=on_select />
        </TableRow>
    }
}
