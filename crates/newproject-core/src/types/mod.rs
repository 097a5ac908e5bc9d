//! Type definitions for newproject configuration and requests

mod config_types;
mod kind;

pub use config_types::*;
pub use kind::*;
