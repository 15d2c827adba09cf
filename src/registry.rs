//! Registry of dialect generators keyed by dialect identifier.
//!
//! Callers pick a generator by name instead of matching on dialect types.
//! The registry is built explicitly; there is no global instance.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{GenerateError, Result};
use crate::render::{CockroachGenerator, DialectGenerator};

#[derive(Default, Clone)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn DialectGenerator>>,
    aliases: HashMap<String, String>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every dialect shipped in this crate.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(CockroachGenerator::new());
        registry.register_alias("cockroach", "cockroachdb");
        registry.register_alias("crdb", "cockroachdb");
        registry
    }

    /// Register a generator under its own `dialect()` identifier, replacing
    /// any generator already registered there.
    pub fn register<G>(&mut self, generator: G)
    where
        G: DialectGenerator + 'static,
    {
        self.generators
            .insert(generator.dialect().to_ascii_lowercase(), Arc::new(generator));
    }

    pub fn register_alias(&mut self, alias: &str, dialect: &str) {
        self.aliases
            .insert(alias.to_ascii_lowercase(), dialect.to_ascii_lowercase());
    }

    pub fn get(&self, dialect: &str) -> Option<Arc<dyn DialectGenerator>> {
        let key = dialect.trim().to_ascii_lowercase();
        let key = self.aliases.get(&key).cloned().unwrap_or(key);
        self.generators.get(&key).cloned()
    }

    pub fn require(&self, dialect: &str) -> Result<Arc<dyn DialectGenerator>> {
        self.get(dialect)
            .ok_or_else(|| GenerateError::UnknownDialect {
                dialect: dialect.to_string(),
                available: self.dialects().into_iter().map(String::from).collect(),
            })
    }

    /// Registered dialect identifiers, sorted. Aliases are not listed.
    pub fn dialects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Aliases pointing at `dialect`, sorted.
    pub fn aliases_for(&self, dialect: &str) -> Vec<&str> {
        let target = dialect.to_ascii_lowercase();
        let mut names: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, d)| **d == target)
            .map(|(alias, _)| alias.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("dialects", &self.dialects())
            .field("aliases", &self.aliases)
            .finish()
    }
}
