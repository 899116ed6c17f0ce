//! Table cell for money values
//!
//! # Examples
//!
//! ```rust,ignore
//! // Total spent
//! <TableCellMoney value=spent />
//!
//! // Sale over expected sales
//! <TableCellMoney value=spent expected=expected_sales />
//! ```

use super::number_format::{format_currency, format_currency_pair};
use crate::shared::settings::use_settings;
use contracts::domain::a001_merch::MerchTotals;
use leptos::prelude::*;
use thaw::*;

/// Money cell formatted with the page's currency settings
///
/// With `expected` set the cell reads "value / expected" and is coloured
/// green once the value reaches the expectation, red below it.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,

    /// Target to compare `value` against
    #[prop(optional, into)]
    expected: Option<Signal<f64>>,
) -> impl IntoView {
    let settings = use_settings();

    let formatted_text = move || {
        let s = settings.get();
        match expected {
            Some(goal) => {
                format_currency_pair(value.get(), goal.get(), &s.currency_prefix, &s.group_separator)
            }
            None => format_currency(value.get(), &s.currency_prefix, &s.group_separator),
        }
    };

    let cell_style = move || goal_style(value.get(), expected.map(|goal| goal.get()));

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}

/// Colour of a "value / expected" cell. Nothing expected stays neutral.
fn goal_style(value: f64, expected: Option<f64>) -> &'static str {
    let Some(expected_sales) = expected else {
        return "";
    };
    let totals = MerchTotals {
        spent: value,
        expected_sales,
    };
    match totals.meets_goal() {
        Some(true) => "color: var(--color-success-700)",
        Some(false) => "color: var(--color-error-700)",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_style() {
        assert_eq!(goal_style(45.0, Some(45.0)), "color: var(--color-success-700)");
        assert_eq!(goal_style(30.0, Some(45.0)), "color: var(--color-error-700)");
        assert_eq!(goal_style(30.0, Some(0.0)), "");
        assert_eq!(goal_style(30.0, None), "");
    }
}
