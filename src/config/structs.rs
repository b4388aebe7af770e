//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure.
pub mod configuration;

/// Certificate store location settings.
pub mod store_config;
