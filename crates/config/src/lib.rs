//! Configuration loading and env substitution for the westeros gateway.
//!
//! Config files: `westeros.toml`, `westeros.yaml`, or `westeros.json`
//! Searched in `./` then `~/.config/westeros/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, load_config},
    schema::{GraphqlConfig, ServerConfig, WesterosConfig},
};
