use anyhow::{Context, Result};
use sqlgen_config::SqlgenConfig;
use sqlgen_loader::{
    ClassRegistry, ExtractOptions, ModelExtractor, load_config_or_default, load_models,
};

/// Config plus every entity model below the models directory.
#[derive(Debug)]
pub struct Project {
    pub config: SqlgenConfig,
    pub registry: ClassRegistry,
}

impl Project {
    pub fn extractor(&self) -> ModelExtractor<'_> {
        ModelExtractor::new(&self.registry, ExtractOptions::from(&self.config))
    }
}

/// Load sqlgen.json (or defaults) and the model tree from the current directory.
pub fn load_project() -> Result<Project> {
    let config = load_config_or_default(None)?;
    let registry = load_models(&config).context("load entity models")?;
    Ok(Project { config, registry })
}

/// Normalize a package argument; `None`, blanks and `.` mean the root package.
pub fn package_arg(package: Option<&str>) -> &str {
    package
        .map(|p| p.trim().trim_matches('.'))
        .unwrap_or_default()
}
