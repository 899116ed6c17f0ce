pub mod merch_direction;

pub use merch_direction::MerchDirection;
