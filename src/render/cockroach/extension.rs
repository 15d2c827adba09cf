//! SQL rendering for extensions

use crate::model::Extension;

pub fn render_create_extension(extension: &Extension) -> String {
    format!(
        "CREATE EXTENSION IF NOT EXISTS {} SCHEMA {};",
        extension.name, extension.schema
    )
}

pub fn render_drop_extension(extension: &Extension) -> String {
    format!(
        "DROP EXTENSION IF EXISTS {} CASCADE;",
        extension.qualified_name()
    )
}
