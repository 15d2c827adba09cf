use serde::{Deserialize, Serialize};

/// A database extension installed into a schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub name: String,
    pub schema: String,
}

impl Extension {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }

    /// Extensions are addressed by bare name; the schema is only where they install.
    pub fn qualified_name(&self) -> String {
        self.name.clone()
    }
}
