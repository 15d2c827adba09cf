use serde::{Deserialize, Serialize};

/// An enumerated type. Value order is the ordinal order of the type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Enum {
    pub schema: String,
    pub name: String,
    pub values: Vec<String>,
}

impl Enum {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}
