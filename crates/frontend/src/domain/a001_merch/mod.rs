pub mod store;
pub mod ui;

pub use store::MerchStore;
pub use ui::MerchTable;
