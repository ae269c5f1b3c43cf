//! Renders [`TableDefinition`](sqlgen_core::TableDefinition) values into
//! `CREATE TABLE` statements for MySQL (InnoDB, utf8mb4).

pub mod column;
pub mod create_table;

pub use column::{render_column, render_raw_lines};
pub use create_table::{render_create_table, render_tables};
