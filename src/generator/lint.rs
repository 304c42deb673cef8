use super::{templates, GenerationContext, GenerationStep};
use crate::{
    config::GenerationConfig,
    constants::{dependencies, files},
    error::Result,
    ioutils::write_json,
};

/// ESLint with the TypeScript parser and recommended presets.
pub struct Lint;

impl GenerationStep for Lint {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn is_enabled(&self, config: &GenerationConfig) -> bool {
        config.use_lint
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        log::info!("Adding ESLint");
        ctx.install(dependencies::LINT_DEV, true)?;
        write_json(&templates::eslintrc(), ctx.path(files::ESLINT_CONFIG))?;

        Ok(())
    }
}
