//! Filesystem collaborators for qualia
//!
//! Provides text reading, atomic writes, and config file loading.

pub mod config;
pub mod error;
pub mod io;

pub use config::{ConfigStore, QualiaConfig};
pub use error::{Error, Result};
