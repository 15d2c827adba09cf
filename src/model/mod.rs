//! The unified model: a dialect-neutral description of a database schema.
//!
//! Every type here is a plain value object. Generators only read them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

pub mod constraint;
pub mod extension;
pub mod function;
pub mod index;
pub mod schema;
pub mod sequence;
pub mod table;
pub mod trigger;
pub mod types;

pub use constraint::{Constraint, ConstraintKind};
pub use extension::Extension;
pub use function::{Function, FunctionArgument};
pub use index::{Index, IndexColumn};
pub use schema::Schema;
pub use sequence::Sequence;
pub use table::{Column, DataType, Table};
pub use trigger::Trigger;
pub use types::Enum;

/// Top-level container. Collections keep their input order and are not
/// checked for duplicate names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifiedModel {
    pub schemas: Vec<Schema>,
    pub tables: Vec<Table>,
    pub enums: Vec<Enum>,
    pub functions: Vec<Function>,
    pub triggers: Vec<Trigger>,
    pub sequences: Vec<Sequence>,
    pub extensions: Vec<Extension>,
}

impl UnifiedModel {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.schemas.len()
            + self.tables.len()
            + self.enums.len()
            + self.functions.len()
            + self.triggers.len()
            + self.sequences.len()
            + self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.object_count() == 0
    }
}

/// Load a model file. `.json` files are read as JSON, everything else as YAML.
pub fn load_model(path: &Path) -> Result<UnifiedModel> {
    info!("Loading unified model from {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file {}", path.display()))?;

    let model = parse_model(&contents, path)?;
    debug!(
        schemas = model.schemas.len(),
        tables = model.tables.len(),
        enums = model.enums.len(),
        functions = model.functions.len(),
        triggers = model.triggers.len(),
        sequences = model.sequences.len(),
        extensions = model.extensions.len(),
        "Model loaded"
    );
    Ok(model)
}

fn parse_model(contents: &str, path: &Path) -> Result<UnifiedModel> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(contents)
            .with_context(|| format!("Invalid JSON model in {}", path.display()))
    } else {
        serde_yaml::from_str(contents)
            .with_context(|| format!("Invalid YAML model in {}", path.display()))
    }
}
