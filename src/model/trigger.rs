use serde::{Deserialize, Serialize};

/// A row-level trigger attached to a table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    pub name: String,
    /// BEFORE, AFTER, INSTEAD OF
    pub timing: String,
    /// INSERT, UPDATE, DELETE, or an OR-joined combination
    pub event: String,
    pub schema: String,
    pub table: String,
    pub definition: String,
}

impl Trigger {
    pub fn table_name(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }

    /// Triggers are scoped to their table, so the qualified form carries both.
    pub fn qualified_name(&self) -> String {
        format!("{} ON {}", self.name, self.table_name())
    }
}
