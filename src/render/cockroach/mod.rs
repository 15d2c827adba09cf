//! CockroachDB DDL generator
//!
//! Identifiers are emitted as given, unquoted. Every create statement that
//! CockroachDB accepts with `IF NOT EXISTS` carries it, and every drop uses
//! `IF EXISTS ... CASCADE`.

pub mod constraint;
pub mod extension;
pub mod function;
pub mod index;
pub mod schema;
pub mod sequence;
pub mod table;
pub mod trigger;
pub mod types;

use crate::error::Result;
use crate::model::{Enum, Extension, Function, Schema, Sequence, Table, Trigger};
use crate::render::DialectGenerator;

pub use constraint::render_constraint_definition;
pub use extension::{render_create_extension, render_drop_extension};
pub use function::{render_create_function, render_drop_function};
pub use index::render_create_index;
pub use schema::{render_create_schema, render_drop_schema};
pub use sequence::{render_create_sequence, render_drop_sequence};
pub use table::{render_column_definition, render_create_table, render_drop_table};
pub use trigger::{render_create_trigger, render_drop_trigger};
pub use types::{render_create_enum, render_drop_enum};

pub const DIALECT: &str = "cockroachdb";

#[derive(Debug, Clone, Copy, Default)]
pub struct CockroachGenerator;

impl CockroachGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl DialectGenerator for CockroachGenerator {
    fn dialect(&self) -> &'static str {
        DIALECT
    }

    fn display_name(&self) -> &'static str {
        "CockroachDB"
    }

    fn create_schema(&self, schema: &Schema) -> Result<String> {
        Ok(render_create_schema(schema))
    }

    fn create_table(&self, table: &Table) -> Result<String> {
        Ok(render_create_table(table))
    }

    fn create_enum(&self, enum_type: &Enum) -> Result<String> {
        Ok(render_create_enum(enum_type))
    }

    fn create_function(&self, function: &Function) -> Result<String> {
        Ok(render_create_function(function))
    }

    fn create_trigger(&self, trigger: &Trigger) -> Result<String> {
        Ok(render_create_trigger(trigger))
    }

    fn create_sequence(&self, sequence: &Sequence) -> Result<String> {
        Ok(render_create_sequence(sequence))
    }

    fn create_extension(&self, extension: &Extension) -> Result<String> {
        Ok(render_create_extension(extension))
    }

    fn drop_schema(&self, schema: &Schema) -> Result<String> {
        Ok(render_drop_schema(schema))
    }

    fn drop_table(&self, table: &Table) -> Result<String> {
        Ok(render_drop_table(table))
    }

    fn drop_enum(&self, enum_type: &Enum) -> Result<String> {
        Ok(render_drop_enum(enum_type))
    }

    fn drop_function(&self, function: &Function) -> Result<String> {
        Ok(render_drop_function(function))
    }

    fn drop_trigger(&self, trigger: &Trigger) -> Result<String> {
        Ok(render_drop_trigger(trigger))
    }

    fn drop_sequence(&self, sequence: &Sequence) -> Result<String> {
        Ok(render_drop_sequence(sequence))
    }

    fn drop_extension(&self, extension: &Extension) -> Result<String> {
        Ok(render_drop_extension(extension))
    }
}
