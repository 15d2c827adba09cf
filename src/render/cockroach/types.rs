//! SQL rendering for enumerated types

use itertools::Itertools;

use crate::model::Enum;
use crate::render::quote_literal;

pub fn render_create_enum(enum_type: &Enum) -> String {
    format!(
        "CREATE TYPE {} AS ENUM ({});",
        enum_type.qualified_name(),
        enum_type.values.iter().map(|v| quote_literal(v)).join(", ")
    )
}

pub fn render_drop_enum(enum_type: &Enum) -> String {
    format!("DROP TYPE IF EXISTS {} CASCADE;", enum_type.qualified_name())
}
