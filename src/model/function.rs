use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionArgument {
    pub name: String,
    pub data_type: String,
}

impl FunctionArgument {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A stored function.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Function {
    pub schema: String,
    pub name: String,
    pub arguments: Vec<FunctionArgument>,
    pub return_type: String,
    /// Body text in the target dialect's procedural syntax, inserted verbatim
    pub definition: String,
}

impl Function {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}
