use thiserror::Error;

/// Class-level marker required for table generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Entity,
    Table,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Entity => f.write_str("@Entity"),
            Marker::Table => f.write_str("@Table"),
        }
    }
}

/// Failure to build a table definition from an entity model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("class '{class}' is not marked {marker}")]
    MissingEntityMarker { class: String, marker: Marker },
    #[error("cannot resolve type '{type_name}' of field {class}.{field}; make sure the class compiles")]
    UnresolvableFieldType {
        class: String,
        field: String,
        type_name: String,
    },
    #[error("class not found: {0}")]
    ClassNotFound(String),
    #[error("class name '{name}' is ambiguous: {candidates}")]
    AmbiguousClass { name: String, candidates: String },
    #[error("cannot resolve superclass '{superclass}' of class '{class}'")]
    UnresolvableSuperclass { class: String, superclass: String },
    #[error("superclass chain of '{0}' contains a cycle")]
    SuperclassCycle(String),
}

/// Two model files declare the same qualified class name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate class: {0}")]
pub struct DuplicateClassError(pub String);
