//! Leaf parsing layer: filename metadata and numeric data rows.

pub mod name;
pub mod row;

pub use name::LogName;
pub use row::{parse_first_row, parse_row, parse_rows};
