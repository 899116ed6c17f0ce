use super::aggregate::Merch;
use crate::domain::a002_item::{find_by_name, Item};

/// amount × goal price of the matching catalog item, 0 without a match
pub fn expected_sales(merch: &Merch, items: &[Item]) -> f64 {
    find_by_name(items, &merch.item_name)
        .map(|item| f64::from(merch.amount) * item.goal_price)
        .unwrap_or(0.0)
}

/// Derived money values of one row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MerchTotals {
    pub spent: f64,
    pub expected_sales: f64,
}

impl MerchTotals {
    pub fn for_row(merch: &Merch, items: &[Item]) -> Self {
        Self {
            spent: merch.spent(),
            expected_sales: expected_sales(merch, items),
        }
    }

    /// spent / expected sales; `None` when nothing is expected
    pub fn ratio(&self) -> Option<f64> {
        if self.expected_sales == 0.0 {
            None
        } else {
            Some(self.spent / self.expected_sales)
        }
    }

    pub fn meets_goal(&self) -> Option<bool> {
        self.ratio().map(|r| r >= 1.0)
    }
}
