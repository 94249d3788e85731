//! Configuration loading from the site root, environment and CLI.
//!
//! Pure schema parsing and validation live in `domain::configuration`.

mod load_config;

pub use load_config::{BASE_URL_ENV, ConfigOverrides, load_config, resolve_config};
