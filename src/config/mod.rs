//! Configuration management module.
//!
//! Loads and validates the `config.toml` used by the operator binary. The
//! library types never read it themselves: the store directory is handed to
//! `CertificateStore` by whoever owns the configuration.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//!
//! [store]
//! directory = "/etc/nginx-ssl"
//! create_directory = true
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ingress_ssl_store::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//!
//! Configuration::save_from_config("config.toml", &Configuration::init())?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Configuration data structures.
pub mod structs;
