use serde::{Deserialize, Serialize};

/// One indexed column.
///
/// `order` > 0 is ascending, < 0 descending, 0 leaves the direction unstated.
/// `null_position` > 0 puts nulls first, < 0 last, 0 leaves it unstated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexColumn {
    pub column_name: String,
    pub order: i32,
    pub null_position: i32,
}

impl IndexColumn {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            order: 0,
            null_position: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Index {
    pub schema: String,
    pub table: String,
    pub name: Option<String>,
    pub is_unique: bool,
    pub columns: Vec<IndexColumn>,
    pub include_columns: Vec<String>,
    /// Partial index predicate
    pub where_clause: Option<String>,
}

impl Index {
    pub fn table_name(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }
}
