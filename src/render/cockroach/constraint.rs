//! SQL rendering for table-level constraint clauses

use crate::model::{Constraint, ConstraintKind};
use crate::render::non_empty;

/// Render the constraint clause used inside CREATE TABLE.
///
/// Primary keys are synthesized from column flags by the table renderer, so
/// `PrimaryKey` renders nothing here, as do unrecognised kinds.
pub fn render_constraint_definition(constraint: &Constraint) -> String {
    let mut sql = match &constraint.kind {
        ConstraintKind::Unique => format!("UNIQUE ({})", constraint.columns.join(", ")),
        ConstraintKind::Check => format!("CHECK ({})", constraint.check_expression),
        ConstraintKind::ForeignKey => {
            let mut fk_def = format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                constraint.columns.join(", "),
                constraint.referenced_table,
                constraint.referenced_columns.join(", ")
            );

            if let Some(on_delete) = non_empty(&constraint.on_delete) {
                fk_def.push_str(&format!(" ON DELETE {}", on_delete));
            }
            if let Some(on_update) = non_empty(&constraint.on_update) {
                fk_def.push_str(&format!(" ON UPDATE {}", on_update));
            }

            fk_def
        }
        ConstraintKind::PrimaryKey | ConstraintKind::Other(_) => return String::new(),
    };

    if let Some(name) = non_empty(&constraint.name) {
        sql.push_str(&format!(" CONSTRAINT {}", name));
    }

    sql
}
