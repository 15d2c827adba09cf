//! DDL rendering for the unified model.
//!
//! Each target dialect implements [`DialectGenerator`]. The per-object methods
//! return one statement; the provided methods assemble whole-model scripts in
//! a fixed kind order.

pub mod cockroach;

use crate::error::Result;
use crate::model::{Enum, Extension, Function, Schema, Sequence, Table, Trigger, UnifiedModel};

pub use cockroach::CockroachGenerator;

/// A full-model script together with any dialect caveats met while rendering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSchema {
    pub sql: String,
    pub warnings: Vec<String>,
}

/// Create/drop rendering contract for one SQL dialect.
///
/// All methods are fallible so that dialects which cannot express an object
/// can say so. Implementations must be deterministic and must not mutate
/// or retain the model.
pub trait DialectGenerator: Send + Sync {
    /// Registry identifier, e.g. `cockroachdb`
    fn dialect(&self) -> &'static str;

    /// Human-readable name used in script headers
    fn display_name(&self) -> &'static str;

    fn create_schema(&self, schema: &Schema) -> Result<String>;
    fn create_table(&self, table: &Table) -> Result<String>;
    fn create_enum(&self, enum_type: &Enum) -> Result<String>;
    fn create_function(&self, function: &Function) -> Result<String>;
    fn create_trigger(&self, trigger: &Trigger) -> Result<String>;
    fn create_sequence(&self, sequence: &Sequence) -> Result<String>;
    fn create_extension(&self, extension: &Extension) -> Result<String>;

    fn drop_schema(&self, schema: &Schema) -> Result<String>;
    fn drop_table(&self, table: &Table) -> Result<String>;
    fn drop_enum(&self, enum_type: &Enum) -> Result<String>;
    fn drop_function(&self, function: &Function) -> Result<String>;
    fn drop_trigger(&self, trigger: &Trigger) -> Result<String>;
    fn drop_sequence(&self, sequence: &Sequence) -> Result<String>;
    fn drop_extension(&self, extension: &Extension) -> Result<String>;

    /// Warnings to attach to a generated script. None by default.
    fn warnings(&self, _model: &UnifiedModel) -> Vec<String> {
        vec![]
    }

    /// Every create statement in kind order: schemas, tables, enums,
    /// functions, triggers, sequences, extensions.
    ///
    /// Objects are not sorted by dependency within or across kinds.
    fn create_statements(&self, model: &UnifiedModel) -> Result<Vec<String>> {
        let mut statements = Vec::with_capacity(model.object_count());

        for schema in &model.schemas {
            statements.push(self.create_schema(schema)?);
        }
        for table in &model.tables {
            statements.push(self.create_table(table)?);
        }
        for enum_type in &model.enums {
            statements.push(self.create_enum(enum_type)?);
        }
        for function in &model.functions {
            statements.push(self.create_function(function)?);
        }
        for trigger in &model.triggers {
            statements.push(self.create_trigger(trigger)?);
        }
        for sequence in &model.sequences {
            statements.push(self.create_sequence(sequence)?);
        }
        for extension in &model.extensions {
            statements.push(self.create_extension(extension)?);
        }

        Ok(statements)
    }

    /// Drop statements in the reverse of the create kind order.
    fn drop_statements(&self, model: &UnifiedModel) -> Result<Vec<String>> {
        let mut statements = Vec::with_capacity(model.object_count());

        for extension in &model.extensions {
            statements.push(self.drop_extension(extension)?);
        }
        for sequence in &model.sequences {
            statements.push(self.drop_sequence(sequence)?);
        }
        for trigger in &model.triggers {
            statements.push(self.drop_trigger(trigger)?);
        }
        for function in &model.functions {
            statements.push(self.drop_function(function)?);
        }
        for enum_type in &model.enums {
            statements.push(self.drop_enum(enum_type)?);
        }
        for table in &model.tables {
            statements.push(self.drop_table(table)?);
        }
        for schema in &model.schemas {
            statements.push(self.drop_schema(schema)?);
        }

        Ok(statements)
    }

    /// Render the whole model as one creation script.
    fn generate_schema(&self, model: &UnifiedModel) -> Result<GeneratedSchema> {
        let header = format!(
            "-- {} Schema Generated from UnifiedModel",
            self.display_name()
        );
        let statements = self.create_statements(model)?;
        Ok(GeneratedSchema {
            sql: assemble_script(&header, &statements),
            warnings: self.warnings(model),
        })
    }

    /// Render the whole model as one teardown script.
    fn generate_teardown(&self, model: &UnifiedModel) -> Result<GeneratedSchema> {
        let header = format!(
            "-- {} Teardown Generated from UnifiedModel",
            self.display_name()
        );
        let statements = self.drop_statements(model)?;
        Ok(GeneratedSchema {
            sql: assemble_script(&header, &statements),
            warnings: self.warnings(model),
        })
    }
}

/// Header comment, blank line, then each statement followed by a blank line.
fn assemble_script(header: &str, statements: &[String]) -> String {
    let mut sql = String::new();
    sql.push_str(header);
    sql.push_str("\n\n");
    for statement in statements {
        sql.push_str(statement);
        sql.push_str("\n\n");
    }
    sql
}

/// Wrap a value in single quotes. Embedded quotes are not escaped.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value)
}

/// Treat `Some("")` the same as `None` for optional clauses.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
