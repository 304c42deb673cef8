/// Handles argument parsing and the top-level run.
pub mod cli;

/// Generation options and package manager commands.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// The ordered project generation pipeline.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// The generated project's `package.json`.
pub mod manifest;

/// External process execution.
pub mod process;

/// User input and interaction handling.
pub mod prompt;
