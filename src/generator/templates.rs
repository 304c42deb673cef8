//! Fixed file contents written into generated projects

use serde_json::{json, Value};

/// Compiler options for `tsconfig.json`.
pub fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES6",
            "module": "commonjs",
            "rootDir": "src",
            "outDir": "dist",
            "strict": true,
            "esModuleInterop": true
        }
    })
}

/// Express server listening on `PORT` (default 3000) with a single root route.
pub const ENTRY_POINT: &str = r#"import express, { Request, Response } from 'express'
import dotenv from 'dotenv'

dotenv.config()

const app = express()
const port = process.env.PORT || 3000

app.get('/', (_req: Request, res: Response) => {
  res.send('Hello, Express + TypeScript!')
})

app.listen(port, () => {
  console.log(`Server is running on port ${port}`)
})
"#;

/// Type-aware ESLint setup with the two recommended presets and no custom rules.
pub fn eslintrc() -> Value {
    json!({
        "parser": "@typescript-eslint/parser",
        "extends": ["eslint:recommended", "plugin:@typescript-eslint/recommended"],
        "parserOptions": {
            "ecmaVersion": 2020,
            "sourceType": "module"
        },
        "rules": {}
    })
}

pub fn prettierrc() -> Value {
    json!({
        "semi": false,
        "singleQuote": true,
        "trailingComma": "all"
    })
}

pub const PRETTIER_IGNORE: &str = "dist\nnode_modules\n";

/// Husky pre-commit hook delegating to the staged-file runner.
///
/// `runner` is the command line that launches lint-staged, e.g. `npx lint-staged`.
pub fn pre_commit_hook(runner: &str) -> String {
    format!("#!/bin/sh\n. \"$(dirname \"$0\")/_/husky.sh\"\n{runner}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsconfig_is_strict() {
        assert_eq!(tsconfig()["compilerOptions"]["strict"], true);
        assert_eq!(tsconfig()["compilerOptions"]["outDir"], "dist");
    }

    #[test]
    fn entry_point_listens_on_env_port() {
        assert!(ENTRY_POINT.contains("process.env.PORT || 3000"));
        assert!(ENTRY_POINT.contains("app.listen(port"));
        assert!(ENTRY_POINT.contains("app.get('/'"));
    }

    #[test]
    fn pre_commit_hook_has_shebang_and_runner() {
        let hook = pre_commit_hook("npx lint-staged");
        assert!(hook.starts_with("#!/bin/sh\n"));
        assert!(hook.ends_with("npx lint-staged\n"));
    }
}
