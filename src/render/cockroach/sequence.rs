//! SQL rendering for sequences

use crate::model::Sequence;
use crate::render::non_empty;

/// Render CREATE SEQUENCE. Each numeric clause appears only when its value
/// is set; CYCLE / NO CYCLE is always stated.
pub fn render_create_sequence(sequence: &Sequence) -> String {
    let mut sql = format!(
        "CREATE SEQUENCE IF NOT EXISTS {}",
        sequence.qualified_name()
    );

    if let Some(data_type) = non_empty(&sequence.data_type) {
        sql.push_str(&format!(" AS {}", data_type));
    }

    let clauses = [
        ("START WITH", sequence.start),
        ("INCREMENT BY", sequence.increment),
        ("MINVALUE", sequence.min_value),
        ("MAXVALUE", sequence.max_value),
        ("CACHE", sequence.cache_size),
    ];
    for (keyword, value) in clauses {
        if let Some(value) = value {
            sql.push_str(&format!(" {} {}", keyword, value));
        }
    }

    sql.push_str(if sequence.cycle { " CYCLE" } else { " NO CYCLE" });
    sql.push(';');
    sql
}

pub fn render_drop_sequence(sequence: &Sequence) -> String {
    format!(
        "DROP SEQUENCE IF EXISTS {} CASCADE;",
        sequence.qualified_name()
    )
}
