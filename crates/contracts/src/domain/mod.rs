pub mod a001_merch;
pub mod a002_item;
pub mod common;
