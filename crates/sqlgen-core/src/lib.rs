pub mod schema;
pub mod type_map;

pub use schema::{
    ColumnDefinition, ColumnName, DEFAULT_LENGTH, DEFAULT_PRECISION, TableDefinition, TableName,
};
pub use type_map::{ColumnTypeTag, ENUM_SENTINEL_TYPE, is_primitive_keyword, map_semantic_type};
