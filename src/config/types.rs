use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConfigInput {
    pub generator: Option<GeneratorInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub generator: Generator,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeneratorInput {
    pub dialect: Option<String>,
    pub model: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    pub dialect: String,
    pub model: PathBuf,
    pub output: Option<PathBuf>,
}

impl ConfigInput {
    /// Anchor relative file paths at `base`, the directory of the config file.
    pub fn relative_to(self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        ConfigInput {
            generator: self.generator.map(|g| GeneratorInput {
                dialect: g.dialect,
                model: g.model.map(anchor),
                output: g.output.map(anchor),
            }),
        }
    }
}

// CLI args

#[derive(Debug, Clone, Default, Args)]
pub struct GeneratorArgs {
    /// Target dialect (see `ddlgen dialects`)
    #[arg(long, short = 'd')]
    pub dialect: Option<String>,

    /// Unified model file (.yaml, .yml or .json)
    #[arg(long, short = 'm')]
    pub model: Option<PathBuf>,

    /// Write SQL to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl From<GeneratorArgs> for GeneratorInput {
    fn from(args: GeneratorArgs) -> Self {
        GeneratorInput {
            dialect: args.dialect,
            model: args.model,
            output: args.output,
        }
    }
}
