use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            generator: match (self.generator, other.generator) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
        }
    }
}

impl GeneratorInput {
    pub fn merge_with(self, other: GeneratorInput) -> GeneratorInput {
        GeneratorInput {
            dialect: self.dialect.merge(other.dialect),
            model: self.model.merge(other.model),
            output: self.output.merge(other.output),
        }
    }
}
