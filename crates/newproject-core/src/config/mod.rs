//! Configuration loading and management

mod loader;

pub use loader::{
    embedded_default_config, ConfigSource, NewprojectConfig, CONFIG_ENV, CONFIG_FILE_NAME,
    DEV_ROOT_ENV,
};
