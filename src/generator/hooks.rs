use serde_json::{json, Value};

use super::{templates, GenerationContext, GenerationStep};
use crate::{
    config::GenerationConfig,
    constants::{dependencies, files, lint_staged, scripts},
    error::Result,
    ioutils::{create_dir_all, write_file},
};

/// Husky pre-commit hook running lint-staged.
pub struct Hooks;

/// Fix commands lint-staged runs on staged TypeScript files.
pub const FIX_COMMANDS: [&str; 2] = [lint_staged::ESLINT_FIX, lint_staged::PRETTIER_WRITE];

/// The `lint-staged` manifest block.
pub fn lint_staged_block() -> Value {
    let mut block = serde_json::Map::new();
    block.insert(lint_staged::GLOB.to_string(), json!(FIX_COMMANDS));
    Value::Object(block)
}

impl GenerationStep for Hooks {
    fn name(&self) -> &'static str {
        "hooks"
    }

    fn is_enabled(&self, config: &GenerationConfig) -> bool {
        config.use_hooks
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        log::info!("Adding Husky + lint-staged");
        ctx.install(dependencies::HOOKS_DEV, true)?;
        ctx.exec("husky", &["install"])?;

        let manifest = ctx.manifest_mut();
        manifest.set_block(lint_staged::MANIFEST_KEY, lint_staged_block());
        let (name, command) = scripts::PREPARE;
        manifest.set_script(name, command);

        let husky_dir = ctx.path(files::HUSKY_DIR);
        create_dir_all(&husky_dir)?;

        let hook_path = husky_dir.join(files::PRE_COMMIT_HOOK);
        let runner = ctx.config().package_manager.exec_command_line("lint-staged");
        write_file(&templates::pre_commit_hook(&runner), &hook_path)?;
        ctx.run("chmod", &["+x".to_string(), hook_path.display().to_string()])?;

        log::info!("Husky and lint-staged have been added");
        Ok(())
    }
}
