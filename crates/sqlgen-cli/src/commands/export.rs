use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use futures::future::try_join_all;
use sqlgen_config::SqlgenConfig;
use sqlgen_loader::{GeneratedTable, NOTHING_SELECTED, NoopObserver, generate_package};
use tokio::fs;

use crate::utils::{load_project, package_arg};

const SQL_EXTENSION: &str = "sql";

pub async fn cmd_export(export_dir: Option<PathBuf>, package: Option<&str>) -> Result<()> {
    let project = load_project()?;
    let package = package_arg(package);

    // Rendering is CPU-bound and done synchronously.
    let outcome = generate_package(
        &project.registry,
        &project.extractor(),
        package,
        &mut NoopObserver,
    );
    if outcome.is_empty() {
        bail!(NOTHING_SELECTED);
    }
    ensure_unique_tables(&outcome.tables)?;

    let target_root = resolve_export_dir(export_dir, &project.config);

    // Only a full export owns every file in the output directory.
    if package.is_empty() {
        clean_export_dir(&target_root).await?;
    }
    fs::create_dir_all(&target_root)
        .await
        .with_context(|| format!("create export dir {}", target_root.display()))?;

    let write_futures: Vec<_> = outcome
        .tables
        .iter()
        .map(|generated| {
            let out_path = build_output_path(&target_root, &generated.table.name);
            let class = generated.class.clone();
            let content = format!("{}\n", generated.sql);
            async move {
                fs::write(&out_path, content)
                    .await
                    .with_context(|| format!("write {}", out_path.display()))?;
                println!(
                    "{} {} -> {}",
                    "Exported".bright_green(),
                    class.bright_white(),
                    out_path.display()
                );
                Ok::<(), anyhow::Error>(())
            }
        })
        .collect();

    try_join_all(write_futures).await?;
    tracing::info!(count = outcome.tables.len(), dir = %target_root.display(), "export finished");
    Ok(())
}

fn resolve_export_dir(export_dir: Option<PathBuf>, config: &SqlgenConfig) -> PathBuf {
    export_dir.unwrap_or_else(|| config.output_dir().to_path_buf())
}

/// Two tables written to the same file would race on it.
fn ensure_unique_tables(tables: &[GeneratedTable]) -> Result<()> {
    let mut seen: BTreeMap<String, &GeneratedTable> = BTreeMap::new();
    for generated in tables {
        let file = sanitize_filename(&generated.table.name);
        if let Some(first) = seen.insert(file, generated) {
            if first.table.name == generated.table.name {
                bail!(
                    "table '{}' is declared by both {} and {}",
                    generated.table.name,
                    first.class,
                    generated.class
                );
            }
            bail!(
                "tables '{}' ({}) and '{}' ({}) would both be exported to {}.{}",
                first.table.name,
                first.class,
                generated.table.name,
                generated.class,
                sanitize_filename(&generated.table.name),
                SQL_EXTENSION
            );
        }
    }
    Ok(())
}

/// Remove previously exported `.sql` files from the output directory.
async fn clean_export_dir(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Ok(());
    }

    let mut entries = fs::read_dir(root)
        .await
        .with_context(|| format!("read dir {}", root.display()))?;

    let mut files_to_remove = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SQL_EXTENSION) {
            files_to_remove.push(path);
        }
    }

    let remove_futures: Vec<_> = files_to_remove
        .into_iter()
        .map(|path| async move {
            fs::remove_file(&path)
                .await
                .with_context(|| format!("remove file {}", path.display()))
        })
        .collect();

    try_join_all(remove_futures).await?;
    Ok(())
}

fn build_output_path(root: &Path, table_name: &str) -> PathBuf {
    root.join(format!("{}.{}", sanitize_filename(table_name), SQL_EXTENSION))
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect::<String>()
}
