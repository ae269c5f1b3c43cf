pub mod column;
pub mod names;
pub mod table;

pub use column::{ColumnDefinition, DEFAULT_LENGTH, DEFAULT_PRECISION};
pub use names::{ColumnName, TableName};
pub use table::TableDefinition;
