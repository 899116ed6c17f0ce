pub mod a001_merch;
