use serde::{Deserialize, Deserializer, Serialize};

use super::constraint::Constraint;
use super::index::Index;

/// A column type: a name plus optional parameters such as length or precision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "DataTypeInput")]
pub struct DataType {
    pub name: String,
    pub parameters: Vec<String>,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: vec![],
        }
    }

    pub fn with_parameters<I, S>(name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.parameters.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.parameters.join(", "))
        }
    }
}

impl From<&str> for DataType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Model files may spell a type as `INT` or as `{ name: VARCHAR, parameters: [255] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum DataTypeInput {
    Name(String),
    Full {
        name: String,
        #[serde(default, deserialize_with = "deserialize_parameters")]
        parameters: Vec<String>,
    },
}

impl From<DataTypeInput> for DataType {
    fn from(input: DataTypeInput) -> Self {
        match input {
            DataTypeInput::Name(name) => DataType::new(name),
            DataTypeInput::Full { name, parameters } => DataType { name, parameters },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Parameter {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn deserialize_parameters<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Parameter>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|p| match p {
            Parameter::Text(s) => s,
            Parameter::Integer(i) => i.to_string(),
            Parameter::Float(f) => f.to_string(),
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    /// When true the default is an expression and is emitted unquoted
    pub default_is_function: bool,
    pub collation: Option<String>,
    pub is_primary_key: bool,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: DataType::default(),
            is_nullable: true,
            default_value: None,
            default_is_function: false,
            collation: None,
            is_primary_key: false,
        }
    }
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
    pub indexes: Vec<Index>,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            columns,
            constraints: vec![],
            indexes: vec![],
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Names of columns flagged as primary key, in column order
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }
}
