use sqlgen_config::{CommentFallback, SqlgenConfig};
use sqlgen_core::{
    ColumnDefinition, DEFAULT_LENGTH, DEFAULT_PRECISION, ENUM_SENTINEL_TYPE, TableDefinition,
    is_primitive_keyword,
};
use sqlgen_naming::default_table_name;

use crate::error::{ExtractError, Marker};
use crate::model::{ClassModel, FieldModel, non_empty};
use crate::registry::ClassRegistry;

/// Source of table definitions.
///
/// Implementations read entity metadata from wherever it lives (model files,
/// a compiler front end, reflection) and flatten it into a
/// [`TableDefinition`] ready for rendering.
pub trait MetadataExtractor {
    fn extract(&self, class: &str) -> Result<TableDefinition, ExtractError>;
}

/// Extraction settings that are not part of the entity model itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Used when `@Table` does not set `mapCamelToUnderscore`.
    pub underscore_naming: bool,
    pub comment_fallback: CommentFallback,
    pub default_length: i32,
    pub default_precision: i32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            underscore_naming: true,
            comment_fallback: CommentFallback::ApiDoc,
            default_length: DEFAULT_LENGTH,
            default_precision: DEFAULT_PRECISION,
        }
    }
}

impl From<&SqlgenConfig> for ExtractOptions {
    fn from(config: &SqlgenConfig) -> Self {
        Self {
            underscore_naming: config.column_case().is_snake(),
            comment_fallback: config.comment_fallback(),
            default_length: config.default_length(),
            default_precision: config.default_precision(),
        }
    }
}

/// Extracts table definitions from a [`ClassRegistry`] of entity models.
#[derive(Debug, Clone, Copy)]
pub struct ModelExtractor<'a> {
    registry: &'a ClassRegistry,
    options: ExtractOptions,
}

impl<'a> ModelExtractor<'a> {
    pub fn new(registry: &'a ClassRegistry, options: ExtractOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'a ClassRegistry {
        self.registry
    }

    /// Build the table definition for one class.
    pub fn extract_class(&self, class: &ClassModel) -> Result<TableDefinition, ExtractError> {
        let qualified = class.qualified_name();
        if !class.annotations.entity {
            return Err(ExtractError::MissingEntityMarker {
                class: qualified,
                marker: Marker::Entity,
            });
        }
        let Some(table_marker) = class.annotations.table.as_ref() else {
            return Err(ExtractError::MissingEntityMarker {
                class: qualified,
                marker: Marker::Table,
            });
        };

        let name = non_empty(table_marker.name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| default_table_name(&class.name));
        let comment = non_empty(table_marker.comment.as_deref()).or_else(|| {
            self.fallback_comment(class.annotations.api_model.as_ref().and_then(|d| d.value.as_deref()))
        });

        let mut table = TableDefinition::new(name).with_underscore_naming(
            table_marker
                .map_camel_to_underscore
                .unwrap_or(self.options.underscore_naming),
        );
        table.comment = comment.map(str::to_string);

        for owner in self.registry.superclass_chain(class)? {
            self.push_columns(owner, &mut table)?;
        }
        self.push_columns(class, &mut table)?;

        let primaries = table.columns.iter().filter(|c| c.is_primary).count();
        if primaries > 1 {
            tracing::warn!(
                class = %qualified,
                count = primaries,
                "multiple @Id fields; the first one becomes the primary key"
            );
        }

        Ok(table)
    }

    fn push_columns(
        &self,
        owner: &ClassModel,
        table: &mut TableDefinition,
    ) -> Result<(), ExtractError> {
        for field in &owner.fields {
            if let Some(column) = self.column_for(owner, field)? {
                table.columns.push(column);
            }
        }
        Ok(())
    }

    fn column_for(
        &self,
        owner: &ClassModel,
        field: &FieldModel,
    ) -> Result<Option<ColumnDefinition>, ExtractError> {
        let annotations = &field.annotations;
        let Some(marker) = annotations.column.as_ref() else {
            return Ok(None);
        };

        let semantic_type = self.semantic_type(owner, field, &mut Vec::new())?;
        let mut column = ColumnDefinition::new(&field.name, semantic_type)
            .with_nullable(marker.nullable.unwrap_or(true))
            .with_length(marker.length.unwrap_or(self.options.default_length))
            .with_precision(marker.precision.unwrap_or(self.options.default_precision));

        column.explicit_name = non_empty(marker.name.as_deref()).map(str::to_string);
        column.comment = non_empty(marker.comment.as_deref())
            .or_else(|| {
                self.fallback_comment(
                    annotations
                        .api_model_property
                        .as_ref()
                        .and_then(|d| d.value.as_deref()),
                )
            })
            .map(str::to_string);
        column.raw_definition_lines = marker.column_definition.clone().map(|d| d.into_vec());

        if let Some(id) = &annotations.id {
            column.nullable = false;
            column.is_primary = true;
            column.auto_increment = id.is_increment();
        }
        if annotations.version_control {
            column.nullable = false;
        }

        Ok(Some(column))
    }

    /// Resolve the type-mapper key for a field.
    ///
    /// `visiting` holds the relation fields already followed, so that an id
    /// field referencing its own class terminates.
    fn semantic_type(
        &self,
        owner: &ClassModel,
        field: &FieldModel,
        visiting: &mut Vec<(String, String)>,
    ) -> Result<String, ExtractError> {
        let type_name = field.r#type.trim();
        if is_primitive_keyword(type_name) {
            return Ok(type_name.to_string());
        }

        let unresolvable = || ExtractError::UnresolvableFieldType {
            class: owner.qualified_name(),
            field: field.name.clone(),
            type_name: type_name.to_string(),
        };

        let Some(target) = self.registry.resolve(type_name, owner.package()) else {
            if type_name.contains('.') || type_name.ends_with("[]") {
                // Library type outside the model set.
                return Ok(type_name.to_string());
            }
            return Err(unresolvable());
        };

        if target.is_enum() {
            return Ok(ENUM_SENTINEL_TYPE.to_string());
        }

        if field.annotations.is_relation()
            && let Some(id_field) = target.id_field()
        {
            let key = (owner.qualified_name(), field.name.clone());
            if visiting.contains(&key) {
                return Err(unresolvable());
            }
            visiting.push(key);
            return self.semantic_type(target, id_field, visiting);
        }

        Ok(target.qualified_name())
    }

    fn fallback_comment<'m>(&self, api_doc: Option<&'m str>) -> Option<&'m str> {
        if self.options.comment_fallback.uses_api_doc() {
            non_empty(api_doc)
        } else {
            None
        }
    }
}

impl MetadataExtractor for ModelExtractor<'_> {
    fn extract(&self, class: &str) -> Result<TableDefinition, ExtractError> {
        let class = self.registry.find_class(class)?;
        self.extract_class(class)
    }
}
