use std::path::{Path, PathBuf};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlgen_core::{DEFAULT_LENGTH, DEFAULT_PRECISION};

use crate::comment_fallback::CommentFallback;
use crate::file_format::FileFormat;
use crate::name_case::NameCase;

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "sqlgen.json";

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("sql")
}

fn default_column_naming_case() -> NameCase {
    NameCase::Snake
}

fn default_length() -> i32 {
    DEFAULT_LENGTH
}

fn default_precision() -> i32 {
    DEFAULT_PRECISION
}

/// Top-level sqlgen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SqlgenConfig {
    /// Root of the entity model tree. Sub-directories are packages.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    /// Output directory for `sqlgen export`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Format used for new entity model templates.
    #[serde(default)]
    pub model_format: FileFormat,
    /// Column naming when a `@Table` marker does not set `mapCamelToUnderscore`.
    #[serde(default = "default_column_naming_case")]
    pub column_naming_case: NameCase,
    /// Secondary comment source for tables and columns.
    #[serde(default)]
    pub comment_fallback: CommentFallback,
    /// `VARCHAR` length when a `@Column` marker omits `length`.
    #[serde(default = "default_length")]
    pub default_length: i32,
    /// Fractional precision when a `@Column` marker omits `precision`.
    #[serde(default = "default_precision")]
    pub default_precision: i32,
}

impl Default for SqlgenConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            output_dir: default_output_dir(),
            model_format: FileFormat::Json,
            column_naming_case: default_column_naming_case(),
            comment_fallback: CommentFallback::ApiDoc,
            default_length: DEFAULT_LENGTH,
            default_precision: DEFAULT_PRECISION,
        }
    }
}

impl SqlgenConfig {
    /// Path where entity model files are stored.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Path where exported SQL files are written.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Preferred file format for entity models.
    pub fn model_format(&self) -> FileFormat {
        self.model_format
    }

    /// Naming case for derived column names.
    pub fn column_case(&self) -> NameCase {
        self.column_naming_case
    }

    pub fn comment_fallback(&self) -> CommentFallback {
        self.comment_fallback
    }

    pub fn default_length(&self) -> i32 {
        self.default_length
    }

    pub fn default_precision(&self) -> i32 {
        self.default_precision
    }
}
