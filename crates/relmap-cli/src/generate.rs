use anyhow::{bail, Context, Result};
use relmap::schema::def::SchemaDef;
use relmap::{Config, Entity, Generator, MysqlTypes, Schema};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub schema: PathBuf,

    pub config: Option<PathBuf>,

    /// Raw table names to generate. Empty means every table.
    pub tables: Vec<String>,

    pub pretty: bool,
}

/// Reads the schema, generates the requested entities and renders them as
/// JSON.
pub fn exec(options: &Options) -> Result<String> {
    let config = match &options.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let source = fs::read_to_string(&options.schema)
        .with_context(|| format!("failed to read schema `{}`", options.schema.display()))?;

    let entities = render(&source, &config, &options.tables)?;

    let output = if options.pretty {
        serde_json::to_string_pretty(&entities)?
    } else {
        serde_json::to_string(&entities)?
    };

    Ok(output)
}

/// Generates entities from a JSON schema document.
pub fn render(source: &str, config: &Config, tables: &[String]) -> Result<Vec<Entity>> {
    let def: SchemaDef = serde_json::from_str(source).context("failed to parse schema")?;
    let schema = Schema::from_defs(&def)?;

    if !schema.diagnostics().is_empty() {
        tracing::warn!(
            count = schema.diagnostics().len(),
            "schema has unrecognized directives"
        );
    }

    let generator = Generator::new(&schema, config, &MysqlTypes);

    if tables.is_empty() {
        return Ok(generator.entities()?);
    }

    let mut entities = vec![];
    for name in tables {
        let Some(table) = schema.table_by_name(name) else {
            bail!("table `{name}` does not exist");
        };
        entities.push(generator.entity(table.id)?);
    }

    Ok(entities)
}

fn load_config(path: &Path) -> Result<Config> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config `{}`", path.display()))?;
    let config = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse config `{}`", path.display()))?;
    Ok(config)
}
