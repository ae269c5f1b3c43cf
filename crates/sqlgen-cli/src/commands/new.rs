use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde_json::Value;
use sqlgen_config::FileFormat;
use sqlgen_loader::{
    ClassModel, FieldModel, IdMarker, TableMarker, load_config, model_file_path,
};
use sqlgen_naming::{default_table_name, to_pascal_case};

pub fn cmd_new(name: String, package: Option<String>, format: Option<FileFormat>) -> Result<()> {
    let config = load_config()?;
    let format = format.unwrap_or(config.model_format());

    let class = template(&name, package.as_deref())?;
    let path = model_file_path(config.models_dir(), &class, format);
    if path.exists() {
        bail!("model file already exists: {}", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create models directory {}", parent.display()))?;
    }

    let schema_url = schema_url();
    match format {
        FileFormat::Json => write_json_with_schema(&path, &class, &schema_url)?,
        FileFormat::Yaml | FileFormat::Yml => write_yaml(&path, &class, &schema_url)?,
    }

    println!(
        "{} {} {}",
        "Created model template:".bright_green(),
        class.qualified_name().bright_white(),
        format!("({})", path.display()).dimmed()
    );
    Ok(())
}

/// Entity with a `@Table` named after the class and an auto-increment id.
fn template(name: &str, package: Option<&str>) -> Result<ClassModel> {
    let class_name = to_pascal_case(name.trim());
    if class_name.is_empty() || !class_name.chars().all(|c| c.is_alphanumeric() || c == '$') {
        bail!("invalid class name: '{name}'");
    }

    let mut class = ClassModel::new(&class_name);
    class.package = package
        .map(|p| p.trim().trim_matches('.'))
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    class.annotations.entity = true;
    class.annotations.table = Some(TableMarker {
        name: Some(default_table_name(&class_name)),
        ..Default::default()
    });

    let mut id = FieldModel::column("id", "long");
    id.annotations.id = Some(IdMarker {
        strategy: Some(sqlgen_loader::model::INCREMENT_STRATEGY.to_string()),
    });
    class.fields.push(id);
    Ok(class)
}

fn schema_url() -> String {
    let base = std::env::var("SQLGEN_SCHEMA_BASE_URL").ok();
    let base = base.as_deref().unwrap_or(
        "https://raw.githubusercontent.com/sunnysuperman/sqlgen/refs/heads/main/schemas",
    );
    format!("{}/entity.schema.json", base.trim_end_matches('/'))
}

fn write_json_with_schema(path: &Path, class: &ClassModel, schema_url: &str) -> Result<()> {
    let mut value = serde_json::to_value(class).context("serialize model to json")?;
    if let Value::Object(ref mut map) = value {
        map.insert("$schema".to_string(), Value::String(schema_url.to_string()));
    }
    let text = serde_json::to_string_pretty(&value).context("stringify json with schema")?;
    fs::write(path, text).with_context(|| format!("write file: {}", path.display()))?;
    Ok(())
}

fn write_yaml(path: &Path, class: &ClassModel, schema_url: &str) -> Result<()> {
    let mut value = serde_yaml::to_value(class).context("serialize model to yaml value")?;
    if let serde_yaml::Value::Mapping(ref mut map) = value {
        map.insert(
            serde_yaml::Value::String("$schema".to_string()),
            serde_yaml::Value::String(schema_url.to_string()),
        );
    }
    let text = serde_yaml::to_string(&value).context("serialize yaml with schema")?;
    fs::write(path, text).with_context(|| format!("write file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;
    use sqlgen_config::{CONFIG_FILE_NAME, SqlgenConfig};
    use sqlgen_loader::{ExtractOptions, MetadataExtractor, ModelExtractor, load_models};
    use std::path::PathBuf;
    use tempfile::tempdir;

    struct CwdGuard {
        original: PathBuf,
    }

    impl CwdGuard {
        fn new(dir: &PathBuf) -> Self {
            let original = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir).unwrap();
            Self { original }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.original);
        }
    }

    fn write_config() {
        let cfg = SqlgenConfig::default();
        fs::write(CONFIG_FILE_NAME, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
    }

    #[rstest]
    #[case(FileFormat::Json, "models/com/acme/OrderItem.json")]
    #[case(FileFormat::Yaml, "models/com/acme/OrderItem.yaml")]
    #[case(FileFormat::Yml, "models/com/acme/OrderItem.yml")]
    #[serial]
    fn cmd_new_writes_loadable_template(#[case] format: FileFormat, #[case] expected: &str) {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_config();

        cmd_new("order_item".into(), Some("com.acme".into()), Some(format)).unwrap();

        let path = PathBuf::from(expected);
        assert!(path.exists());
        assert!(fs::read_to_string(&path).unwrap().contains("entity.schema.json"));

        let registry = load_models(&SqlgenConfig::default()).unwrap();
        let table = ModelExtractor::new(&registry, ExtractOptions::default())
            .extract("com.acme.OrderItem")
            .unwrap();
        assert_eq!(table.name, "order_item");
        assert!(table.columns[0].is_primary);
        assert!(table.columns[0].auto_increment);
    }

    #[test]
    #[serial]
    fn cmd_new_uses_configured_format() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        let cfg = SqlgenConfig {
            model_format: FileFormat::Yaml,
            ..Default::default()
        };
        fs::write(CONFIG_FILE_NAME, serde_json::to_string(&cfg).unwrap()).unwrap();

        cmd_new("User".into(), None, None).unwrap();
        assert!(PathBuf::from("models/User.yaml").exists());
    }

    #[test]
    #[serial]
    fn cmd_new_requires_config() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());

        let err = cmd_new("User".into(), None, None).unwrap_err();
        assert!(err.to_string().contains("sqlgen init"));
    }

    #[test]
    #[serial]
    fn cmd_new_refuses_to_overwrite() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_config();

        cmd_new("User".into(), None, None).unwrap();
        let err = cmd_new("User".into(), None, None).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[rstest]
    #[case("")]
    #[case("user account")]
    #[case("user.account")]
    fn template_rejects_invalid_names(#[case] name: &str) {
        assert!(template(name, None).is_err());
    }

    #[test]
    fn template_ignores_blank_package() {
        let class = template("Tag", Some(" ")).unwrap();
        assert_eq!(class.package, None);
        assert_eq!(class.qualified_name(), "Tag");
    }
}
