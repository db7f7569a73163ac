pub mod data_table;
pub mod number_format;

pub use data_table::{ColumnSpec, DataTable, TableModel};
pub use number_format::*;
