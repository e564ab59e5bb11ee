pub mod table;
pub mod views;

pub use table::{Alignment, Table, TableColumn};
