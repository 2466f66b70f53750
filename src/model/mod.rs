//! Data model for extracted tables

mod table;

pub use table::{Row, RowSource, Table};
