//! Base steps run for every project

use super::{templates, GenerationContext, GenerationStep};
use crate::{
    constants::{dependencies, files, scripts},
    error::Result,
    ioutils::{create_dir_all, write_file, write_json},
};

/// Creates the project directory. Existing contents are left in place.
pub struct CreateDirectory;

impl GenerationStep for CreateDirectory {
    fn name(&self) -> &'static str {
        "create-directory"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let root = ctx.project_root();
        if root.exists() {
            log::info!("Using existing directory '{}'", root.display());
        } else {
            log::info!("Creating directory '{}'", root.display());
        }
        create_dir_all(root)
    }
}

/// Lets the package manager write the initial `package.json`.
pub struct InitManifest;

impl GenerationStep for InitManifest {
    fn name(&self) -> &'static str {
        "init-manifest"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let args = ctx.config().package_manager.init_args();
        ctx.run_package_manager(&args)
    }
}

pub struct InstallDependencies;

impl GenerationStep for InstallDependencies {
    fn name(&self) -> &'static str {
        "install-dependencies"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        ctx.install(dependencies::BASE, false)?;
        ctx.install(dependencies::BASE_DEV, true)
    }
}

pub struct WriteTsconfig;

impl GenerationStep for WriteTsconfig {
    fn name(&self) -> &'static str {
        "write-tsconfig"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        write_json(&templates::tsconfig(), ctx.path(files::TSCONFIG))
    }
}

pub struct WriteEntryPoint;

impl GenerationStep for WriteEntryPoint {
    fn name(&self) -> &'static str {
        "write-entry-point"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let target = ctx.path(files::SOURCE_DIR).join(files::ENTRY_POINT);
        write_file(templates::ENTRY_POINT, target)
    }
}

/// Registers the `dev`, `build` and `start` scripts.
pub struct RegisterScripts;

impl GenerationStep for RegisterScripts {
    fn name(&self) -> &'static str {
        "register-scripts"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let manifest = ctx.manifest_mut();
        for (name, command) in [scripts::DEV, scripts::BUILD, scripts::START] {
            manifest.set_script(name, command);
        }
        Ok(())
    }
}
