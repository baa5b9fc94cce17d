pub mod catalog;
pub mod feed;
pub mod finance;
