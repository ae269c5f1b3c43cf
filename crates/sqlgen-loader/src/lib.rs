pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod model;
pub mod models;
pub mod registry;

pub use config::{load_config, load_config_from_path, load_config_or_default};
pub use error::{DuplicateClassError, ExtractError, Marker};
pub use extract::{ExtractOptions, MetadataExtractor, ModelExtractor};
pub use generate::{
    BatchObserver, BatchOutcome, GeneratedTable, NOTHING_SELECTED, NoopObserver, generate_class,
    generate_package, join_statements,
};
pub use model::{
    ApiDoc, ClassAnnotations, ClassKind, ClassModel, ColumnMarker, FieldAnnotations, FieldModel,
    IdMarker, StrOrArray, TableMarker,
};
pub use models::{load_models, load_models_from_dir, model_file_path, parse_model_file};
pub use registry::ClassRegistry;
