#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Secondary source for table and column comments when the `@Table` /
/// `@Column` marker carries none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum CommentFallback {
    /// Only the table/column marker comments are used.
    None,
    /// Fall back to `@ApiModel` / `@ApiModelProperty` documentation values.
    #[default]
    ApiDoc,
}

impl CommentFallback {
    /// Returns true when API documentation values may fill missing comments.
    pub fn uses_api_doc(self) -> bool {
        matches!(self, CommentFallback::ApiDoc)
    }
}
