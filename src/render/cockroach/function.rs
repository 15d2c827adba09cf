//! SQL rendering for functions

use itertools::Itertools;

use crate::model::Function;

pub fn render_create_function(function: &Function) -> String {
    let arguments = function
        .arguments
        .iter()
        .map(|arg| format!("{} {}", arg.name, arg.data_type))
        .join(", ");

    format!(
        "CREATE OR REPLACE FUNCTION {}({}) RETURNS {} AS {};",
        function.qualified_name(),
        arguments,
        function.return_type,
        function.definition
    )
}

pub fn render_drop_function(function: &Function) -> String {
    format!(
        "DROP FUNCTION IF EXISTS {} CASCADE;",
        function.qualified_name()
    )
}
