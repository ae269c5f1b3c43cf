#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlgen_naming::to_snake_case;

use crate::schema::names::ColumnName;
use crate::type_map::{ColumnTypeTag, map_semantic_type};

pub const DEFAULT_LENGTH: i32 = 255;
pub const DEFAULT_PRECISION: i32 = 2;

fn default_true() -> bool {
    true
}

fn default_length() -> i32 {
    DEFAULT_LENGTH
}

fn default_precision() -> i32 {
    DEFAULT_PRECISION
}

/// One column of a table, as produced by an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Overrides the derived column name when present and non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_name: Option<ColumnName>,
    pub source_field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Primitive keyword or fully-qualified type name; the type mapper key.
    pub semantic_type: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Only used for `VARCHAR`.
    #[serde(default = "default_length")]
    pub length: i32,
    /// Only used for `FLOAT`, `DOUBLE` and `DECIMAL`.
    #[serde(default = "default_precision")]
    pub precision: i32,
    /// Verbatim definition lines. When non-empty they replace the derived
    /// definition entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_definition_lines: Option<Vec<String>>,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub is_primary: bool,
}

impl ColumnDefinition {
    pub fn new(source_field_name: impl Into<String>, semantic_type: impl Into<String>) -> Self {
        Self {
            explicit_name: None,
            source_field_name: source_field_name.into(),
            comment: None,
            semantic_type: semantic_type.into(),
            nullable: true,
            length: DEFAULT_LENGTH,
            precision: DEFAULT_PRECISION,
            raw_definition_lines: None,
            auto_increment: false,
            is_primary: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.explicit_name = Some(name.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_raw_definition<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_definition_lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Column name as it appears in DDL.
    ///
    /// An explicit name always wins. Otherwise the source field name is
    /// converted to snake_case when `use_underscore_naming` is set.
    pub fn display_name(&self, use_underscore_naming: bool) -> String {
        match self.explicit_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if use_underscore_naming => to_snake_case(&self.source_field_name),
            _ => self.source_field_name.clone(),
        }
    }

    /// SQL column type for this column's semantic type.
    pub fn type_tag(&self) -> ColumnTypeTag {
        map_semantic_type(&self.semantic_type)
    }

    /// Raw definition lines, only when present and non-empty.
    pub fn raw_lines(&self) -> Option<&[String]> {
        self.raw_definition_lines
            .as_deref()
            .filter(|lines| !lines.is_empty())
    }
}
