//! Node configuration helpers
//!
//! Each worker receives a plain configuration structure by dependency
//! injection. Only the binaries read the configuration files, through
//! [`build_massa_settings`].

mod massa_settings;

pub use massa_settings::build_massa_settings;
