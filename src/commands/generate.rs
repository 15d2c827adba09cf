use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error;
use crate::model::{UnifiedModel, load_model};
use crate::registry::GeneratorRegistry;
use crate::render::{DialectGenerator, GeneratedSchema};

/// Render the configured model as a creation script.
pub fn cmd_generate(config: &Config, registry: &GeneratorRegistry) -> Result<()> {
    run(config, registry, "schema", |generator, model| {
        generator.generate_schema(model)
    })
}

/// Render the configured model as a teardown script.
pub fn cmd_teardown(config: &Config, registry: &GeneratorRegistry) -> Result<()> {
    run(config, registry, "teardown", |generator, model| {
        generator.generate_teardown(model)
    })
}

fn run<F>(config: &Config, registry: &GeneratorRegistry, script: &str, render: F) -> Result<()>
where
    F: FnOnce(&dyn DialectGenerator, &UnifiedModel) -> error::Result<GeneratedSchema>,
{
    let generator = registry.require(&config.generator.dialect)?;
    debug!("Using {} generator", generator.display_name());

    let model = load_model(&config.generator.model)?;
    info!(
        "Generating {} {} script for {} objects",
        generator.display_name(),
        script,
        model.object_count()
    );

    let generated = render(generator.as_ref(), &model).with_context(|| {
        format!(
            "Failed to generate {} script for {}",
            script,
            config.generator.model.display()
        )
    })?;

    for warning in &generated.warnings {
        warn!("{}", warning);
    }

    write_output(&generated.sql, config.generator.output.as_deref())
}

fn write_output(sql: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, sql)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(sql.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
