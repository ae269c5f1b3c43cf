use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sqlgen_config::{FileFormat, SqlgenConfig};

use crate::model::ClassModel;
use crate::registry::ClassRegistry;

/// Load all entity models from the configured models directory (recursively).
pub fn load_models(config: &SqlgenConfig) -> Result<ClassRegistry> {
    load_models_from_dir(config.models_dir())
}

/// Load all entity models below `dir`.
///
/// Each sub-directory is a package segment. A model file that does not set
/// `package` gets the package of the directory it lives in.
pub fn load_models_from_dir(dir: &Path) -> Result<ClassRegistry> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "models directory does not exist");
        return Ok(ClassRegistry::default());
    }

    let mut classes = Vec::new();
    load_models_recursive(dir, "", &mut classes)?;
    tracing::info!(count = classes.len(), dir = %dir.display(), "loaded entity models");

    ClassRegistry::from_classes(classes)
        .with_context(|| format!("load models from {}", dir.display()))
}

/// Path of the model file for `class`, relative to the models directory.
pub fn model_file_path(models_dir: &Path, class: &ClassModel, format: FileFormat) -> PathBuf {
    let mut path = models_dir.to_path_buf();
    for segment in class.package().split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.{}", class.name, format.extension()));
    path
}

/// Parse a single model file.
pub fn parse_model_file(path: &Path) -> Result<Option<ClassModel>> {
    let Some(format) = path
        .extension()
        .and_then(|s| s.to_str())
        .and_then(FileFormat::from_extension)
    else {
        return Ok(None);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("read model file: {}", path.display()))?;
    let class: ClassModel = match format {
        FileFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("parse JSON model: {}", path.display()))?,
        FileFormat::Yaml | FileFormat::Yml => serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML model: {}", path.display()))?,
    };
    Ok(Some(class))
}

fn load_models_recursive(dir: &Path, package: &str, classes: &mut Vec<ClassModel>) -> Result<()> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("read models directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .context("read directory entry")?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            let Some(segment) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let child = sqlgen_naming::qualify(package, segment);
            load_models_recursive(&path, &child, classes)?;
            continue;
        }

        if path.is_file()
            && let Some(mut class) = parse_model_file(&path)?
        {
            if class.package.is_none() && !package.is_empty() {
                class.package = Some(package.to_string());
            }
            tracing::trace!(class = %class.qualified_name(), path = %path.display(), "parsed model");
            classes.push(class);
        }
    }

    Ok(())
}
