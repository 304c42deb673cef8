#![allow(dead_code)]

use create_express_ts::config::GenerationConfig;
use create_express_ts::error::{Error, Result};
use create_express_ts::generator::Generator;
use create_express_ts::process::{display_command, ProcessRunner};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Stands in for npm / yarn.
///
/// Records every command line, writes a manifest on `init` and adds entries
/// to `dependencies` / `devDependencies` on installs, like the real tools do.
#[derive(Default)]
pub struct FakePackageManager {
    pub calls: RefCell<Vec<String>>,
    pub cwds: RefCell<Vec<PathBuf>>,
    fail_on: Option<String>,
    malformed_init: bool,
}

impl FakePackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the first command whose command line contains `needle`.
    pub fn failing_on(needle: &str) -> Self {
        Self { fail_on: Some(needle.to_string()), ..Self::default() }
    }

    /// Writes an unparsable manifest on `init`.
    pub fn with_malformed_init() -> Self {
        Self { malformed_init: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn init(&self, cwd: &Path) -> Result<()> {
        let manifest_path = cwd.join("package.json");
        if self.malformed_init {
            fs::write(manifest_path, "{ \"name\": ")?;
            return Ok(());
        }
        let name = cwd.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let manifest = json!({
            "name": name,
            "version": "1.0.0",
            "main": "index.js",
            "scripts": {"test": "echo \"Error: no test specified\" && exit 1"},
            "license": "ISC"
        });
        fs::write(manifest_path, serde_json::to_string_pretty(&manifest)?)?;
        Ok(())
    }

    fn install(&self, args: &[String], cwd: &Path) -> Result<()> {
        if self.malformed_init {
            // leave the broken manifest for the generator to find
            return Ok(());
        }
        let manifest_path = cwd.join("package.json");
        let mut manifest: Value = serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;
        let dev = args.iter().any(|a| a == "-D");
        let section = if dev { "devDependencies" } else { "dependencies" };

        let object = manifest.as_object_mut().expect("manifest object");
        let entry = object.entry(section).or_insert_with(|| json!({}));
        for package in args.iter().skip(1).filter(|a| !a.starts_with('-')) {
            entry[package.as_str()] = json!("^1.0.0");
        }
        fs::write(manifest_path, serde_json::to_string_pretty(&manifest)?)?;
        Ok(())
    }
}

impl FakePackageManager {
    /// `chmod +x <path>`; `path` may be absolute or relative to `cwd`.
    #[cfg(unix)]
    fn chmod(args: &[String], cwd: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let target = cwd.join(args.last().expect("chmod target"));
        let mut permissions = fs::metadata(&target)?.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        fs::set_permissions(target, permissions)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn chmod(args: &[String], cwd: &Path) -> Result<()> {
        let target = cwd.join(args.last().expect("chmod target"));
        fs::metadata(target)?;
        Ok(())
    }
}

impl ProcessRunner for FakePackageManager {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        let line = display_command(program, args);
        self.calls.borrow_mut().push(line.clone());
        self.cwds.borrow_mut().push(cwd.to_path_buf());

        if let Some(needle) = &self.fail_on {
            if line.contains(needle.as_str()) {
                return Err(Error::ValidationError(format!("simulated failure of '{line}'")));
            }
        }

        if program == "chmod" {
            return Self::chmod(args, cwd);
        }

        let is_package_manager = program == "npm" || program == "yarn";
        match args.first().map(String::as_str) {
            Some("init") if is_package_manager => self.init(cwd),
            Some("install") | Some("add") if is_package_manager => self.install(args, cwd),
            _ => Ok(()),
        }
    }
}

/// Generates `config` in a fresh temp dir with a fake package manager.
pub fn generate(config: &GenerationConfig) -> (tempfile::TempDir, PathBuf, FakePackageManager) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let runner = FakePackageManager::new();
    let root = Generator::new(&runner).generate(config, tmp_dir.path()).unwrap();
    (tmp_dir, root, runner)
}

/// Relative paths of every file below `root`, sorted, with `/` separators.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub fn read_manifest(root: &Path) -> Value {
    read_json(&root.join("package.json"))
}

/// Names of the manifest's scripts, in file order.
pub fn script_names(manifest: &Value) -> Vec<String> {
    manifest["scripts"].as_object().map(|s| s.keys().cloned().collect()).unwrap_or_default()
}
