//! Render a dialect-neutral unified schema model into dialect-specific DDL.
//!
//! ```rust,ignore
//! let registry = GeneratorRegistry::with_builtins();
//! let generator = registry.require("cockroachdb")?;
//! let script = generator.generate_schema(&model)?;
//! println!("{}", script.sql);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod render;

pub use error::{GenerateError, Result};
pub use model::UnifiedModel;
pub use registry::GeneratorRegistry;
pub use render::{CockroachGenerator, DialectGenerator, GeneratedSchema};
