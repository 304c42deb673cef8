use crate::{
    config::GenerationConfig,
    constants::files,
    error::Result,
    manifest::ProjectManifest,
    process::ProcessRunner,
};
use std::path::{Path, PathBuf};

/// Shared state describing a single generation run.
pub struct GenerationContext<'a> {
    config: &'a GenerationConfig,
    project_root: PathBuf,
    runner: &'a dyn ProcessRunner,
    manifest: ProjectManifest,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        config: &'a GenerationConfig,
        project_root: PathBuf,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self { config, project_root, runner, manifest: ProjectManifest::new() }
    }

    pub fn config(&self) -> &GenerationConfig {
        self.config
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolves a path relative to the project root.
    pub fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.project_root.join(relative)
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut ProjectManifest {
        &mut self.manifest
    }

    /// Runs `program` with the project root as working directory.
    pub fn run(&self, program: &str, args: &[String]) -> Result<()> {
        self.runner.run(program, args, &self.project_root)
    }

    /// Runs the selected package manager with `args`.
    pub fn run_package_manager(&self, args: &[String]) -> Result<()> {
        self.run(self.config.package_manager.program(), args)
    }

    /// Installs `packages` through the selected package manager.
    pub fn install(&self, packages: &[&str], dev: bool) -> Result<()> {
        log::info!(
            "Installing {}{}",
            if dev { "dev dependencies " } else { "" },
            packages.join(", ")
        );
        let args = self.config.package_manager.install_args(packages, dev);
        self.run_package_manager(&args)
    }

    /// Runs a binary installed in the project, e.g. `npx husky install`.
    pub fn exec(&self, bin: &str, extra_args: &[&str]) -> Result<()> {
        let (program, mut args) = self.config.package_manager.exec(bin);
        args.extend(extra_args.iter().map(|a| a.to_string()));
        self.run(program, &args)
    }

    /// Merges the accumulated manifest fields into `package.json`.
    pub fn flush_manifest(&self) -> Result<()> {
        self.manifest.flush(self.path(files::MANIFEST))
    }

    pub fn into_project_root(self) -> PathBuf {
        self.project_root
    }
}
