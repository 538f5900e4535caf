/// Handles argument parsing and the command runner.
pub mod cli;

/// Configuration handling: contention policies and label overrides.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Display label lookup.
pub mod labels;

/// Asynchronous prompts answered by a rendering layer.
pub mod prompt;

/// Rendering layers that show prompts and report the user's choice.
pub mod render;

/// Form validators
pub mod validation;
