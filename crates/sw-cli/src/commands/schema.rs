use anyhow::bail;
use sw_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `sitewise schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = &args.name else {
        return output(&registry.list(), flags.format);
    };

    match registry.get(name) {
        Some(schema) => output(schema, flags.format),
        None => bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        ),
    }
}
