use crate::config::defaults::DIALECT_ENV_VAR;
use crate::config::{merge::Merge, types::*};
use anyhow::{Result, anyhow};

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            generator: self.resolve_generator(&defaults.generator)?,
        })
    }

    fn resolve_generator(&self, defaults: &Generator) -> Result<Generator> {
        let input = self.config_input.generator.as_ref();

        let dialect = input
            .and_then(|g| g.dialect.as_ref())
            .cloned()
            .or_else(|| std::env::var(DIALECT_ENV_VAR).ok())
            .unwrap_or_else(|| defaults.dialect.clone());

        if dialect.trim().is_empty() {
            return Err(anyhow!("Dialect must not be empty"));
        }

        let model = input
            .and_then(|g| g.model.as_ref())
            .cloned()
            .unwrap_or_else(|| defaults.model.clone());

        let output = input
            .and_then(|g| g.output.as_ref())
            .cloned()
            .or_else(|| defaults.output.clone());

        Ok(Generator {
            dialect,
            model,
            output,
        })
    }
}
