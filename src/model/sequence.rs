use serde::{Deserialize, Serialize};

/// A sequence generator.
///
/// Numeric settings are optional: `None` leaves the setting to the database
/// default, while `Some(0)` is an explicit zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequence {
    pub schema: String,
    pub name: String,
    pub data_type: Option<String>,
    pub start: Option<i64>,
    pub increment: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub cache_size: Option<i64>,
    pub cycle: bool,
}

impl Sequence {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}
