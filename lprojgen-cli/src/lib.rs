//! CLI library for testing purposes

pub mod config;
pub mod generate;

pub use config::{FileConfig, Overrides, load_config, resolve};
pub use generate::{generate_strings, generate_stringsdict};
