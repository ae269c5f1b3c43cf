//! Single-class and batch DDL generation on top of a [`MetadataExtractor`].

use sqlgen_core::TableDefinition;
use sqlgen_render::create_table::STATEMENT_SEPARATOR;
use sqlgen_render::render_create_table;

use crate::error::ExtractError;
use crate::extract::MetadataExtractor;
use crate::registry::ClassRegistry;

/// Message shown when nothing could be generated.
pub const NOTHING_SELECTED: &str =
    "no entity class selected: choose an @Entity class or a package containing one";

/// Progress and cancellation hooks for batch generation.
pub trait BatchObserver {
    /// Called before the classes of `package` are processed.
    fn on_package(&mut self, _package: &str) {}

    /// Called for a class that could not be extracted.
    fn on_skipped(&mut self, _class: &str, _error: &ExtractError) {}

    /// Checked before each package; `true` stops the traversal.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// One rendered entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    /// Qualified class name.
    pub class: String,
    pub table: TableDefinition,
    pub sql: String,
}

/// Result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub tables: Vec<GeneratedTable>,
    pub cancelled: bool,
}

impl BatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// All statements joined with a blank line.
    pub fn sql(&self) -> String {
        join_statements(self.tables.iter().map(|t| t.sql.as_str()))
    }
}

pub fn join_statements<'a>(statements: impl IntoIterator<Item = &'a str>) -> String {
    statements
        .into_iter()
        .collect::<Vec<_>>()
        .join(STATEMENT_SEPARATOR)
}

/// Extract and render one class.
pub fn generate_class<E: MetadataExtractor + ?Sized>(
    extractor: &E,
    class: &str,
) -> Result<String, ExtractError> {
    let table = extractor.extract(class)?;
    Ok(render_create_table(&table))
}

/// Extract and render every entity in `package` and its sub-packages.
///
/// Classes that fail to extract are skipped. Classes of a package come first
/// in name order, then each sub-package in name order. The empty package
/// covers the whole registry.
pub fn generate_package<E, O>(
    registry: &ClassRegistry,
    extractor: &E,
    package: &str,
    observer: &mut O,
) -> BatchOutcome
where
    E: MetadataExtractor + ?Sized,
    O: BatchObserver + ?Sized,
{
    let mut outcome = BatchOutcome::default();
    visit_package(registry, extractor, package, observer, &mut outcome);
    outcome
}

fn visit_package<E, O>(
    registry: &ClassRegistry,
    extractor: &E,
    package: &str,
    observer: &mut O,
    outcome: &mut BatchOutcome,
) where
    E: MetadataExtractor + ?Sized,
    O: BatchObserver + ?Sized,
{
    if outcome.cancelled || observer.is_cancelled() {
        outcome.cancelled = true;
        return;
    }

    observer.on_package(package);
    tracing::debug!(package, "generating package");

    for class in registry.classes_in(package) {
        let name = class.qualified_name();
        match extractor.extract(&name) {
            Ok(table) => {
                let sql = render_create_table(&table);
                outcome.tables.push(GeneratedTable {
                    class: name,
                    table,
                    sql,
                });
            }
            Err(err) => {
                tracing::debug!(class = %name, error = %err, "skipping class");
                observer.on_skipped(&name, &err);
            }
        }
    }

    for child in registry.subpackages(package) {
        visit_package(registry, extractor, &child, observer, outcome);
    }
}
