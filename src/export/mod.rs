pub mod log;
pub mod table;

pub use log::write_log;
pub use table::{hours, write_table, TABLE_HEADER};
