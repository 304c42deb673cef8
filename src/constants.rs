//! Constants used throughout the generator

/// Project name offered when the user just presses enter
pub const DEFAULT_PROJECT_NAME: &str = "express-ts-app";

/// File names written into the generated project
pub mod files {
    pub const MANIFEST: &str = "package.json";
    pub const TSCONFIG: &str = "tsconfig.json";
    pub const SOURCE_DIR: &str = "src";
    pub const ENTRY_POINT: &str = "index.ts";
    pub const ESLINT_CONFIG: &str = ".eslintrc.json";
    pub const PRETTIER_CONFIG: &str = ".prettierrc";
    pub const PRETTIER_IGNORE: &str = ".prettierignore";
    pub const HUSKY_DIR: &str = ".husky";
    pub const PRE_COMMIT_HOOK: &str = "pre-commit";
}

/// Packages installed into the generated project
pub mod dependencies {
    pub const BASE: &[&str] = &["express", "dotenv"];
    pub const BASE_DEV: &[&str] =
        &["typescript", "ts-node-dev", "@types/node", "@types/express"];
    pub const LINT_DEV: &[&str] =
        &["eslint", "@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"];
    pub const FORMAT_DEV: &[&str] = &["prettier"];
    pub const HOOKS_DEV: &[&str] = &["husky", "lint-staged"];
}

/// Entries of the manifest `scripts` map
pub mod scripts {
    pub const DEV: (&str, &str) = ("dev", "ts-node-dev src/index.ts");
    pub const BUILD: (&str, &str) = ("build", "tsc");
    pub const START: (&str, &str) = ("start", "node dist/index.js");
    pub const PREPARE: (&str, &str) = ("prepare", "husky install");
}

/// Staged-file runner settings
pub mod lint_staged {
    /// Manifest key holding the lint-staged configuration
    pub const MANIFEST_KEY: &str = "lint-staged";
    pub const GLOB: &str = "**/*.ts";
    pub const ESLINT_FIX: &str = "eslint --fix";
    pub const PRETTIER_WRITE: &str = "prettier --write";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
