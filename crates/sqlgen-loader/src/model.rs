//! Serialized entity model: one source class with its declared markers.
//!
//! This is the file format read from the models directory. It mirrors what a
//! static-analysis pass would read off class and field declarations.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlgen_naming::qualify;

/// Id strategy value that turns on `AUTO_INCREMENT`.
pub const INCREMENT_STRATEGY: &str = "INCREMENT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
}

/// One class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    /// Simple class name.
    pub name: String,
    /// Dotted package; derived from the directory path when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub kind: ClassKind,
    /// Simple name (same package) or qualified name of the superclass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    #[serde(default)]
    pub annotations: ClassAnnotations,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            kind: ClassKind::Class,
            superclass: None,
            annotations: ClassAnnotations::default(),
            fields: Vec::new(),
        }
    }

    pub fn package(&self) -> &str {
        self.package.as_deref().unwrap_or_default()
    }

    pub fn qualified_name(&self) -> String {
        qualify(self.package(), &self.name)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, ClassKind::Enum)
    }

    /// First own field marked `@Id`. Inherited fields are not searched.
    pub fn id_field(&self) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.annotations.id.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClassAnnotations {
    /// `@Entity`
    #[serde(default)]
    pub entity: bool,
    /// `@Table`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableMarker>,
    /// `@ApiModel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_model: Option<ApiDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TableMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_camel_to_underscore: Option<bool>,
}

/// API documentation marker (`@ApiModel` / `@ApiModelProperty`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ApiDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldModel {
    pub name: String,
    /// Primitive keyword, qualified type name, or a class of the model set.
    pub r#type: String,
    #[serde(default)]
    pub annotations: FieldAnnotations,
}

impl FieldModel {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: ty.into(),
            annotations: FieldAnnotations::default(),
        }
    }

    /// Field with an empty `@Column` marker.
    pub fn column(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let mut field = Self::new(name, ty);
        field.annotations.column = Some(ColumnMarker::default());
        field
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldAnnotations {
    /// `@Column`; fields without it are not mapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnMarker>,
    /// `@Id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IdMarker>,
    /// `@VersionControl`
    #[serde(default)]
    pub version_control: bool,
    /// `@ManyToOne`
    #[serde(default)]
    pub many_to_one: bool,
    /// `@OneToOne`
    #[serde(default)]
    pub one_to_one: bool,
    /// `@ApiModelProperty`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_model_property: Option<ApiDoc>,
}

impl FieldAnnotations {
    /// Returns true when the field references another entity by its id.
    pub fn is_relation(&self) -> bool {
        self.many_to_one || self.one_to_one
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ColumnMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_definition: Option<StrOrArray>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct IdMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl IdMarker {
    pub fn is_increment(&self) -> bool {
        self.strategy.as_deref() == Some(INCREMENT_STRATEGY)
    }
}

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum StrOrArray {
    Str(String),
    Array(Vec<String>),
}

impl StrOrArray {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StrOrArray::Str(s) => vec![s],
            StrOrArray::Array(v) => v,
        }
    }
}

/// Treats empty strings as absent, like unset marker attributes.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_class() {
        let json = r#"{
            "name": "User",
            "package": "com.acme",
            "superclass": "BaseEntity",
            "annotations": {
                "entity": true,
                "table": { "name": "user", "mapCamelToUnderscore": false },
                "apiModel": { "value": "accounts" }
            },
            "fields": [
                {
                    "name": "id",
                    "type": "long",
                    "annotations": { "column": {}, "id": { "strategy": "INCREMENT" } }
                },
                {
                    "name": "status",
                    "type": "Status",
                    "annotations": { "column": { "columnDefinition": "status TINYINT" } }
                }
            ]
        }"#;
        let class: ClassModel = serde_json::from_str(json).unwrap();

        assert_eq!(class.qualified_name(), "com.acme.User");
        assert_eq!(class.kind, ClassKind::Class);
        assert!(class.annotations.entity);
        assert_eq!(
            class.annotations.table.as_ref().unwrap().map_camel_to_underscore,
            Some(false)
        );
        assert!(class.id_field().unwrap().annotations.id.as_ref().unwrap().is_increment());
        assert_eq!(
            class.fields[1].annotations.column.clone().unwrap().column_definition,
            Some(StrOrArray::Str("status TINYINT".into()))
        );
    }

    #[test]
    fn test_parse_yaml_enum() {
        let yaml = "name: Status\nkind: enum\n";
        let class: ClassModel = serde_yaml::from_str(yaml).unwrap();
        assert!(class.is_enum());
        assert!(class.fields.is_empty());
        assert_eq!(class.package(), "");
        assert_eq!(class.qualified_name(), "Status");
    }

    #[test]
    fn test_str_or_array_into_vec() {
        assert_eq!(StrOrArray::Str("a".into()).into_vec(), vec!["a"]);
        assert_eq!(
            StrOrArray::Array(vec!["a".into(), "b".into()]).into_vec(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_id_marker_strategy() {
        assert!(!IdMarker::default().is_increment());
        let assign = IdMarker {
            strategy: Some("ASSIGN".into()),
        };
        assert!(!assign.is_increment());
    }

    #[test]
    fn test_relation_flags() {
        let mut annotations = FieldAnnotations::default();
        assert!(!annotations.is_relation());
        annotations.one_to_one = true;
        assert!(annotations.is_relation());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(None), None);
    }
}
