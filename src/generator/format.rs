use super::{templates, GenerationContext, GenerationStep};
use crate::{
    config::GenerationConfig,
    constants::{dependencies, files},
    error::Result,
    ioutils::{write_file, write_json},
};

/// Prettier with its config and ignore list.
pub struct Format;

impl GenerationStep for Format {
    fn name(&self) -> &'static str {
        "format"
    }

    fn is_enabled(&self, config: &GenerationConfig) -> bool {
        config.use_format
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        log::info!("Adding Prettier");
        ctx.install(dependencies::FORMAT_DEV, true)?;
        write_json(&templates::prettierrc(), ctx.path(files::PRETTIER_CONFIG))?;
        write_file(templates::PRETTIER_IGNORE, ctx.path(files::PRETTIER_IGNORE))?;

        Ok(())
    }
}
