//! Configuration management for larder
//!
//! - `types`: contention policies per prompt kind
//! - `loader`: configuration file loading and parsing

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::Config;
pub use types::{Contention, ContentionPolicy};
