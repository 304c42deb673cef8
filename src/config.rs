//! Generation options collected from the user

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

static PROJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("project name pattern is valid")
});

/// Package manager used for every install and exec in the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Every supported manager, in the order offered to the user.
    pub const ALL: [PackageManager; 2] = [PackageManager::Npm, PackageManager::Yarn];

    /// Executable invoked for init and install commands.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments that create a manifest without asking questions.
    pub fn init_args(&self) -> Vec<String> {
        vec!["init".to_string(), "-y".to_string()]
    }

    /// Arguments that add `packages` to the manifest, as dev dependencies when `dev` is set.
    pub fn install_args(&self, packages: &[&str], dev: bool) -> Vec<String> {
        let verb = match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn => "add",
        };
        let mut args = vec![verb.to_string()];
        if dev {
            args.push("-D".to_string());
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }

    /// Program and leading arguments that run a binary installed in the project.
    ///
    /// npm delegates to `npx`, yarn resolves local binaries itself.
    pub fn exec(&self, bin: &str) -> (&'static str, Vec<String>) {
        match self {
            PackageManager::Npm => ("npx", vec![bin.to_string()]),
            PackageManager::Yarn => ("yarn", vec![bin.to_string()]),
        }
    }

    /// Shell command line running a local binary, as written into hook scripts.
    pub fn exec_command_line(&self, bin: &str) -> String {
        let (program, args) = self.exec(bin);
        format!("{program} {}", args.join(" "))
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            other => Err(Error::UnknownPackageManager(other.to_string())),
        }
    }
}

/// Checks that `name` can be used as a single directory name and npm package name.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ValidationError("project name must not be empty".into()));
    }
    if name == "." || name == ".." {
        return Err(Error::ValidationError(format!(
            "project name '{name}' is not a directory name"
        )));
    }
    if !PROJECT_NAME_RE.is_match(name) {
        return Err(Error::ValidationError(format!(
            "project name '{name}' may only contain letters, digits, '.', '_' and '-', \
             and must start with a letter or digit"
        )));
    }
    Ok(())
}

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub project_name: String,
    pub use_lint: bool,
    pub use_format: bool,
    pub use_hooks: bool,
    pub package_manager: PackageManager,
}

impl GenerationConfig {
    /// Creates a config with every optional feature disabled.
    pub fn new(project_name: impl Into<String>, package_manager: PackageManager) -> Result<Self> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;
        Ok(Self {
            project_name,
            use_lint: false,
            use_format: false,
            use_hooks: false,
            package_manager,
        })
    }

    pub fn with_lint(mut self, enabled: bool) -> Self {
        self.use_lint = enabled;
        self
    }

    pub fn with_format(mut self, enabled: bool) -> Self {
        self.use_format = enabled;
        self
    }

    pub fn with_hooks(mut self, enabled: bool) -> Self {
        self.use_hooks = enabled;
        self
    }

    /// Directory the project is generated into, below `parent`.
    pub fn project_root<P: AsRef<Path>>(&self, parent: P) -> PathBuf {
        parent.as_ref().join(&self.project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_project_names() {
        for name in ["demo", "express-ts-app", "my_app.v2", "App1"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_unsafe_project_names() {
        for name in ["", ".", "..", "../escape", "a/b", "a\\b", "-leading", "with space"] {
            let err = validate_project_name(name).unwrap_err();
            assert!(matches!(err, Error::ValidationError(_)), "{name} should be rejected");
        }
    }

    #[test]
    fn new_config_has_features_disabled() {
        let config = GenerationConfig::new("demo", PackageManager::Npm).unwrap();
        assert!(!config.use_lint);
        assert!(!config.use_format);
        assert!(!config.use_hooks);
        assert_eq!(config.package_manager, PackageManager::Npm);
    }

    #[test]
    fn new_config_rejects_invalid_name() {
        assert!(GenerationConfig::new("", PackageManager::Npm).is_err());
    }

    #[test]
    fn builder_toggles_features() {
        let config = GenerationConfig::new("demo", PackageManager::Yarn)
            .unwrap()
            .with_lint(true)
            .with_hooks(true);
        assert!(config.use_lint);
        assert!(!config.use_format);
        assert!(config.use_hooks);
    }

    #[test]
    fn project_root_joins_parent() {
        let config = GenerationConfig::new("demo", PackageManager::Npm).unwrap();
        assert_eq!(config.project_root("/tmp"), PathBuf::from("/tmp/demo"));
    }

    #[test]
    fn npm_commands() {
        let pm = PackageManager::Npm;
        assert_eq!(pm.program(), "npm");
        assert_eq!(pm.init_args(), vec!["init", "-y"]);
        assert_eq!(
            pm.install_args(&["express", "dotenv"], false),
            vec!["install", "express", "dotenv"]
        );
        assert_eq!(pm.install_args(&["prettier"], true), vec!["install", "-D", "prettier"]);
        assert_eq!(pm.exec("husky"), ("npx", vec!["husky".to_string()]));
        assert_eq!(pm.exec_command_line("lint-staged"), "npx lint-staged");
    }

    #[test]
    fn yarn_commands() {
        let pm = PackageManager::Yarn;
        assert_eq!(pm.program(), "yarn");
        assert_eq!(pm.install_args(&["express"], false), vec!["add", "express"]);
        assert_eq!(
            pm.install_args(&["husky", "lint-staged"], true),
            vec!["add", "-D", "husky", "lint-staged"]
        );
        assert_eq!(pm.exec_command_line("lint-staged"), "yarn lint-staged");
    }

    #[test]
    fn parses_and_displays_package_managers() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!(" Yarn ".parse::<PackageManager>().unwrap(), PackageManager::Yarn);
        assert!(matches!(
            "pnpm".parse::<PackageManager>(),
            Err(Error::UnknownPackageManager(_))
        ));
        for pm in PackageManager::ALL {
            assert_eq!(pm.to_string().parse::<PackageManager>().unwrap(), pm);
        }
    }
}
