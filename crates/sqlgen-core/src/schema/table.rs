#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{column::ColumnDefinition, names::TableName};

fn default_true() -> bool {
    true
}

/// One table, as produced by an extractor and consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub name: TableName,
    /// Table comment; the table name is used when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Convert field names to snake_case for columns without an explicit name.
    #[serde(default = "default_true")]
    pub use_underscore_naming: bool,
    /// Declaration order: inherited fields (root ancestor first), then own fields.
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            use_underscore_naming: true,
            columns: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_underscore_naming(mut self, use_underscore_naming: bool) -> Self {
        self.use_underscore_naming = use_underscore_naming;
        self
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// Position of the primary-key column, if any.
    pub fn primary_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.is_primary)
    }

    /// The primary-key column, if any.
    pub fn primary_column(&self) -> Option<&ColumnDefinition> {
        self.primary_index().map(|idx| &self.columns[idx])
    }

    /// Columns in render order: the primary-key column first, all others in
    /// declaration order.
    pub fn ordered_columns(&self) -> Vec<&ColumnDefinition> {
        let mut ordered: Vec<&ColumnDefinition> = self.columns.iter().collect();
        if let Some(idx) = self.primary_index()
            && idx > 0
        {
            let pk = ordered.remove(idx);
            ordered.insert(0, pk);
        }
        ordered
    }

    /// Comment used for the table-level `COMMENT = '...'` clause.
    pub fn display_comment(&self) -> &str {
        match self.comment.as_deref() {
            Some(comment) if !comment.is_empty() => comment,
            _ => &self.name,
        }
    }
}
