//! Interactive option collection
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//!
//! [`collect_config`] asks the fixed question sequence through any
//! [`PromptProvider`] and returns a validated [`GenerationConfig`].

use crate::{
    config::{validate_project_name, GenerationConfig, PackageManager},
    constants::DEFAULT_PROJECT_NAME,
    error::Result,
    prompt::dialoguer::DialoguerPrompter,
};

pub mod dialoguer;
pub mod interface;

pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

fn project_name_validator(value: &str) -> std::result::Result<(), String> {
    validate_project_name(value.trim()).map_err(|e| e.to_string())
}

/// Yes/no feature question, answered yes on enter.
fn ask_feature<P: PromptProvider + ?Sized>(provider: &P, prompt: &str) -> Result<bool> {
    provider.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default: true })
}

/// Asks for the project name, the three feature toggles and the package manager.
pub fn collect_config<P: PromptProvider + ?Sized>(provider: &P) -> Result<GenerationConfig> {
    let project_name = provider.prompt_text(&TextPromptConfig {
        prompt: "Project name".to_string(),
        default: Some(DEFAULT_PROJECT_NAME.to_string()),
        validator: Some(project_name_validator),
    })?;

    let use_lint = ask_feature(provider, "Use ESLint?")?;
    let use_format = ask_feature(provider, "Use Prettier?")?;
    let use_hooks = ask_feature(provider, "Use Husky + Lint-staged?")?;

    let choices: Vec<String> =
        PackageManager::ALL.iter().map(|pm| pm.to_string()).collect();
    let index = provider.prompt_single_choice(&SingleChoiceConfig {
        prompt: "Which package manager would you like to use?".to_string(),
        choices,
        default_index: Some(0),
    })?;
    let package_manager = PackageManager::ALL.get(index).copied().unwrap_or_default();

    let config = GenerationConfig::new(project_name.trim(), package_manager)?
        .with_lint(use_lint)
        .with_format(use_format)
        .with_hooks(use_hooks);
    log::debug!("Collected options: {config:?}");
    Ok(config)
}
