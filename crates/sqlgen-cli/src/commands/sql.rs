use anyhow::Result;
use sqlgen_loader::generate_class;

use crate::utils::load_project;

/// Print the CREATE TABLE statement for one class. Extraction errors are
/// returned unchanged.
pub fn cmd_sql(class: &str) -> Result<()> {
    let project = load_project()?;
    let sql = generate_class(&project.extractor(), class)?;
    println!("{sql}");
    Ok(())
}
