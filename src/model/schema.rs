use serde::{Deserialize, Serialize};

/// A namespace that other objects are created in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub name: String,
    pub character_set: Option<String>,
    pub collation: Option<String>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn qualified_name(&self) -> String {
        self.name.clone()
    }
}
