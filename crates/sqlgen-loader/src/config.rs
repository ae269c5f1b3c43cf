use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sqlgen_config::{CONFIG_FILE_NAME, SqlgenConfig};

/// Load sqlgen.json from the current directory.
pub fn load_config() -> Result<SqlgenConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found. Run 'sqlgen init' first.");
    }
    read_config(path)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<SqlgenConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found at: {}", path.display());
    }
    read_config(path)
}

/// Load config from the project root, falling back to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<SqlgenConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    };

    if config_path.exists() {
        load_config_from_path(config_path)
    } else {
        tracing::debug!("no {CONFIG_FILE_NAME}; using defaults");
        Ok(SqlgenConfig::default())
    }
}

fn read_config(path: PathBuf) -> Result<SqlgenConfig> {
    let content = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let config: SqlgenConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}
