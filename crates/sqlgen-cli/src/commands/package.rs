use anyhow::{Result, bail};
use sqlgen_loader::{BatchObserver, ExtractError, NOTHING_SELECTED, generate_package};

use crate::utils::{load_project, package_arg};

/// Counts classes that could not be extracted, whatever the reason.
#[derive(Debug, Default)]
struct SkipReporter {
    skipped: usize,
}

impl BatchObserver for SkipReporter {
    fn on_package(&mut self, package: &str) {
        tracing::info!(package, "visiting package");
    }

    fn on_skipped(&mut self, class: &str, error: &ExtractError) {
        tracing::debug!(class, %error, "class skipped");
        self.skipped += 1;
    }
}

/// Print CREATE TABLE statements for every entity in `package` and below.
pub fn cmd_package(package: Option<&str>) -> Result<()> {
    let project = load_project()?;
    let package = package_arg(package);

    let mut reporter = SkipReporter::default();
    let outcome = generate_package(
        &project.registry,
        &project.extractor(),
        package,
        &mut reporter,
    );
    if outcome.is_empty() {
        bail!(NOTHING_SELECTED);
    }

    println!("{}", outcome.sql());
    tracing::info!(
        tables = outcome.tables.len(),
        skipped = reporter.skipped,
        "package generated"
    );
    Ok(())
}
