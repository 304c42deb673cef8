use crate::{
    cli::Args,
    config::GenerationConfig,
    error::Result,
    generator::Generator,
    process::{ProcessRunner, SystemRunner},
    prompt::{collect_config, get_prompt_provider, PromptProvider},
};
use std::path::{Path, PathBuf};

/// Main CLI runner: collects options, then generates the project
pub struct Runner<'a> {
    prompter: &'a dyn PromptProvider,
    process_runner: &'a dyn ProcessRunner,
}

impl<'a> Runner<'a> {
    pub fn new(prompter: &'a dyn PromptProvider, process_runner: &'a dyn ProcessRunner) -> Self {
        Self { prompter, process_runner }
    }

    /// Asks the questions and generates the project below `parent`.
    pub fn run<P: AsRef<Path>>(&self, parent: P) -> Result<PathBuf> {
        let config = collect_config(self.prompter)?;
        self.generate(&config, parent)
    }

    /// Generates a project for an already collected config.
    pub fn generate<P: AsRef<Path>>(
        &self,
        config: &GenerationConfig,
        parent: P,
    ) -> Result<PathBuf> {
        let project_root = config.project_root(&parent);
        println!("\nCreating project in {}...", project_root.display());

        let root = Generator::new(self.process_runner).generate(config, parent)?;

        println!("\nDone! Happy coding!");
        Ok(root)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    log::debug!("Starting with {args:?}");
    let prompter = get_prompt_provider();
    let process_runner = SystemRunner::new();
    let parent = std::env::current_dir()?;

    Runner::new(&prompter, &process_runner).run(parent)?;
    Ok(())
}
