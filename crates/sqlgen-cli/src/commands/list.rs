use anyhow::Result;
use colored::Colorize;
use sqlgen_loader::ModelExtractor;

use crate::utils::load_project;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Table { name: String, columns: usize },
    Enum,
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    class: String,
    status: Status,
}

fn describe(extractor: &ModelExtractor<'_>) -> Vec<Entry> {
    extractor
        .registry()
        .iter()
        .map(|class| {
            let status = if class.is_enum() {
                Status::Enum
            } else {
                match extractor.extract_class(class) {
                    Ok(table) => Status::Table {
                        columns: table.columns.len(),
                        name: table.name,
                    },
                    Err(err) => Status::Skipped(err.to_string()),
                }
            };
            Entry {
                class: class.qualified_name(),
                status,
            }
        })
        .collect()
}

pub fn cmd_list() -> Result<()> {
    let project = load_project()?;
    let entries = describe(&project.extractor());

    println!(
        "{} {}",
        "Models directory:".bright_cyan(),
        project.config.models_dir().display().to_string().bright_white()
    );
    let tables = entries
        .iter()
        .filter(|e| matches!(e.status, Status::Table { .. }))
        .count();
    println!(
        "{} {} {}",
        "Classes:".bright_cyan().bold(),
        entries.len().to_string().bright_yellow(),
        format!("({tables} tables)").dimmed()
    );

    for entry in &entries {
        match &entry.status {
            Status::Table { name, columns } => println!(
                "  {} {} -> {} {}",
                "✓".bright_green(),
                entry.class.bright_white(),
                name.bright_magenta(),
                format!("({columns} columns)").dimmed()
            ),
            Status::Enum => println!(
                "  {} {} {}",
                "·".dimmed(),
                entry.class.white(),
                "(enum)".dimmed()
            ),
            Status::Skipped(reason) => println!(
                "  {} {} {}",
                "-".yellow(),
                entry.class.white(),
                reason.yellow()
            ),
        }
    }
    Ok(())
}
