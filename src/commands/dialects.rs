use anyhow::Result;

use crate::registry::GeneratorRegistry;

/// Print each registered dialect with its display name and aliases.
pub fn cmd_dialects(registry: &GeneratorRegistry) -> Result<()> {
    for line in dialect_lines(registry) {
        println!("{}", line);
    }
    Ok(())
}

fn dialect_lines(registry: &GeneratorRegistry) -> Vec<String> {
    registry
        .dialects()
        .into_iter()
        .filter_map(|dialect| {
            let generator = registry.get(dialect)?;
            let aliases = registry.aliases_for(dialect);
            Some(if aliases.is_empty() {
                format!("{}\t{}", dialect, generator.display_name())
            } else {
                format!(
                    "{}\t{} (aliases: {})",
                    dialect,
                    generator.display_name(),
                    aliases.join(", ")
                )
            })
        })
        .collect()
}
