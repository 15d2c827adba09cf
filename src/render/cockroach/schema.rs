//! SQL rendering for schemas

use crate::model::Schema;
use crate::render::non_empty;

pub fn render_create_schema(schema: &Schema) -> String {
    let mut sql = format!("CREATE SCHEMA IF NOT EXISTS {}", schema.name);

    if let Some(character_set) = non_empty(&schema.character_set) {
        sql.push_str(&format!(" CHARACTER SET {}", character_set));
    }
    if let Some(collation) = non_empty(&schema.collation) {
        sql.push_str(&format!(" COLLATE {}", collation));
    }

    sql.push(';');
    sql
}

pub fn render_drop_schema(schema: &Schema) -> String {
    format!("DROP SCHEMA IF EXISTS {} CASCADE;", schema.qualified_name())
}
