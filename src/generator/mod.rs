//! Project generation pipeline
//!
//! A run is an ordered list of named [`GenerationStep`]s. The [`Generator`]
//! runs every step enabled for the config in order and stops at the first
//! failure. Files written before the failure stay on disk.
//!
//! Steps never touch `package.json` directly. They record scripts and tool
//! blocks on the context's [`ProjectManifest`](crate::manifest::ProjectManifest),
//! which is merged into the file once after the last step.

use std::path::{Path, PathBuf};

use crate::{config::GenerationConfig, error::Result, process::ProcessRunner};

pub mod context;
pub mod format;
pub mod hooks;
pub mod lint;
pub mod scaffold;
pub mod templates;

pub use context::GenerationContext;

/// Name attached to errors raised while writing the manifest back.
pub const FLUSH_MANIFEST_STEP: &str = "flush-manifest";

/// A single, independently testable unit of generation.
pub trait GenerationStep {
    /// Stable identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether the step applies to `config`. Base steps always do.
    fn is_enabled(&self, _config: &GenerationConfig) -> bool {
        true
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}

/// The full pipeline: base scaffolding, then lint, format and hooks.
pub fn default_steps() -> Vec<Box<dyn GenerationStep>> {
    vec![
        Box::new(scaffold::CreateDirectory),
        Box::new(scaffold::InitManifest),
        Box::new(scaffold::InstallDependencies),
        Box::new(scaffold::WriteTsconfig),
        Box::new(scaffold::WriteEntryPoint),
        Box::new(scaffold::RegisterScripts),
        Box::new(lint::Lint),
        Box::new(format::Format),
        Box::new(hooks::Hooks),
    ]
}

/// Turns a [`GenerationConfig`] into a project directory.
pub struct Generator<'a> {
    runner: &'a dyn ProcessRunner,
    steps: Vec<Box<dyn GenerationStep>>,
}

impl<'a> Generator<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self::with_steps(runner, default_steps())
    }

    pub fn with_steps(runner: &'a dyn ProcessRunner, steps: Vec<Box<dyn GenerationStep>>) -> Self {
        Self { runner, steps }
    }

    /// Names of the steps that would run for `config`, in order.
    pub fn planned_steps(&self, config: &GenerationConfig) -> Vec<&'static str> {
        self.steps.iter().filter(|step| step.is_enabled(config)).map(|step| step.name()).collect()
    }

    /// Generates the project below `parent` and returns its root directory.
    pub fn generate<P: AsRef<Path>>(
        &self,
        config: &GenerationConfig,
        parent: P,
    ) -> Result<PathBuf> {
        let project_root = config.project_root(parent);
        let mut ctx = GenerationContext::new(config, project_root, self.runner);

        self.steps.iter().filter(|step| step.is_enabled(config)).try_for_each(|step| {
            log::debug!("Running step '{}'", step.name());
            step.run(&mut ctx).map_err(|e| e.in_step(step.name()))
        })?;

        ctx.flush_manifest().map_err(|e| e.in_step(FLUSH_MANIFEST_STEP))?;
        Ok(ctx.into_project_root())
    }
}
