pub mod aggregate;
pub mod error;
pub mod totals;

pub use aggregate::{apply_edit, remove_by_ids, Merch, MerchEdit, MerchField, MerchId, MAX_AMOUNT};
pub use error::MerchEditError;
pub use totals::{expected_sales, MerchTotals};
