pub mod aggregate;

pub use aggregate::{find_by_name, Item};
