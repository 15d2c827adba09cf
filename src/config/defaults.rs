use crate::config::types::*;
use crate::render::cockroach::DIALECT;
use std::path::PathBuf;

pub const DEFAULT_MODEL_FILE: &str = "schema.yaml";

/// Environment variable consulted when no dialect is configured
pub const DIALECT_ENV_VAR: &str = "DDLGEN_DIALECT";

impl Default for Generator {
    fn default() -> Self {
        Self {
            dialect: DIALECT.to_string(),
            model: PathBuf::from(DEFAULT_MODEL_FILE),
            output: None,
        }
    }
}
