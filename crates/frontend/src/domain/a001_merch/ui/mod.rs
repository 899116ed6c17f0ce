pub mod table;

pub use table::MerchTable;
