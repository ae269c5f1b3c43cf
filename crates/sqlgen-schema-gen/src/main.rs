use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use schemars::{Schema, schema_for};
use sqlgen_config::SqlgenConfig;
use sqlgen_core::TableDefinition;
use sqlgen_loader::ClassModel;

#[derive(Debug, Parser)]
#[command(
    name = "sqlgen-schema-gen",
    about = "Emit JSON Schemas for sqlgen entity models, table definitions and config."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args.out)
}

fn run(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let written = [
        write_schema(&out, "entity", &schema_for!(ClassModel))?,
        write_schema(&out, "table", &schema_for!(TableDefinition))?,
        write_schema(&out, "config", &schema_for!(SqlgenConfig))?,
    ];

    println!("Wrote schemas:");
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}

fn write_schema(out: &Path, name: &str, schema: &Schema) -> Result<PathBuf> {
    let path = out.join(format!("{name}.schema.json"));
    let text = serde_json::to_string_pretty(schema)
        .with_context(|| format!("serialize {name} schema"))?;
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
