//! SQL rendering for CREATE INDEX statements

use itertools::Itertools;
use std::cmp::Ordering;

use crate::model::{Index, IndexColumn};
use crate::render::non_empty;

pub fn render_create_index(index: &Index) -> String {
    let mut sql = String::new();

    // CREATE [UNIQUE] INDEX [name]
    sql.push_str("CREATE ");
    if index.is_unique {
        sql.push_str("UNIQUE ");
    }
    sql.push_str("INDEX ");
    if let Some(name) = non_empty(&index.name) {
        sql.push_str(name);
        sql.push(' ');
    }

    sql.push_str(&format!("ON {} (", index.table_name()));
    sql.push_str(&index.columns.iter().map(render_index_column).join(", "));
    sql.push(')');

    // INCLUDE columns for covering indexes
    if !index.include_columns.is_empty() {
        sql.push_str(&format!(" INCLUDE ({})", index.include_columns.join(", ")));
    }

    // WHERE predicate for partial indexes
    if let Some(predicate) = non_empty(&index.where_clause) {
        sql.push_str(&format!(" WHERE {}", predicate));
    }

    sql.push(';');
    sql
}

fn render_index_column(column: &IndexColumn) -> String {
    let mut spec = column.column_name.clone();

    match column.order.cmp(&0) {
        Ordering::Greater => spec.push_str(" ASC"),
        Ordering::Less => spec.push_str(" DESC"),
        Ordering::Equal => {}
    }

    match column.null_position.cmp(&0) {
        Ordering::Greater => spec.push_str(" NULLS FIRST"),
        Ordering::Less => spec.push_str(" NULLS LAST"),
        Ordering::Equal => {}
    }

    spec
}
