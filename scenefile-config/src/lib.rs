//! Configuration loading for scenefile front-ends.

pub mod models;

pub use models::{CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigSource, NamingSettings, SceneFileConfig};
