//! SQL rendering for CREATE TABLE statements

use crate::model::{Column, ConstraintKind, Table};
use crate::render::{non_empty, quote_literal};

use super::constraint::render_constraint_definition;
use super::index::render_create_index;

/// Render CREATE TABLE followed by one CREATE INDEX line per table index.
///
/// The body lists columns in order, then a single `PRIMARY KEY (...)` line
/// built from the columns flagged as primary key, then the remaining
/// constraints in input order. Explicit `PRIMARY KEY` constraints are skipped.
pub fn render_create_table(table: &Table) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", table.qualified_name());

    let mut definitions: Vec<String> = table
        .columns
        .iter()
        .map(render_column_definition)
        .collect();

    let pk_columns = table.primary_key_columns();
    if !pk_columns.is_empty() {
        definitions.push(format!("PRIMARY KEY ({})", pk_columns.join(", ")));
    }

    for constraint in &table.constraints {
        if constraint.kind == ConstraintKind::PrimaryKey {
            continue;
        }
        let definition = render_constraint_definition(constraint);
        if !definition.is_empty() {
            definitions.push(definition);
        }
    }

    sql.push_str(&definitions.join(",\n"));
    sql.push_str("\n);");

    for index in &table.indexes {
        sql.push('\n');
        sql.push_str(&render_create_index(index));
    }

    sql
}

pub fn render_column_definition(column: &Column) -> String {
    let mut col_def = format!("  {} {}", column.name, column.data_type);

    if !column.is_nullable {
        col_def.push_str(" NOT NULL");
    }

    // Expression defaults go in verbatim, literals are quoted
    if let Some(ref default) = column.default_value {
        if column.default_is_function {
            col_def.push_str(&format!(" DEFAULT {}", default));
        } else {
            col_def.push_str(&format!(" DEFAULT {}", quote_literal(default)));
        }
    }

    if let Some(collation) = non_empty(&column.collation) {
        col_def.push_str(&format!(" COLLATE {}", collation));
    }

    col_def
}

pub fn render_drop_table(table: &Table) -> String {
    format!("DROP TABLE IF EXISTS {} CASCADE;", table.qualified_name())
}
