//! Descriptor configuration loading.
//!
//! Loads descriptor parameters from a YAML file.

mod defaults;
mod descriptor;
mod error;

pub use descriptor::CghConfig;
pub use error::ConfigLoadError;
