//! # ingress-ssl-store
//!
//! Certificate bundle storage and validation for a reverse-proxy
//! configuration manager.
//!
//! ## Overview
//!
//! A bundle is a PEM private key plus a PEM certificate chain stored under a
//! name. The store writes bundles atomically to `<directory>/<name>.pem`; the
//! validator reads them back, finds the leaf certificate and reports the
//! hostnames it authorizes (CommonName first, then DNS subject alternative
//! names). Everything else in an ingress setup (secret discovery, proxy
//! config templating, reloads) builds on these two answers.
//!
//! ## Features
//!
//! - **Atomic writes**: temp file + rename, readers never see partial bundles
//! - **Path-safe names**: traversal and separators are rejected up front
//! - **Order tolerant**: key-first and certificate-first artifacts both validate
//! - **Typed errors**: nothing in the library panics or exits on I/O failure
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ingress_ssl_store::ssl::structs::certificate_store::CertificateStore;
//! use ingress_ssl_store::ssl::structs::certificate_validator::CertificateValidator;
//!
//! let store = CertificateStore::open("/etc/nginx-ssl")?;
//! store.put("default-example-tls", &cert_pem, &key_pem)?;
//!
//! let hostnames = CertificateValidator::for_store(&store).validate("default-example-tls")?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - Bundle store, validator and their errors
//! - [`structs`] - CLI argument parsing for the operator binary

/// Common utilities and shared functionality.
///
/// Contains log level parsing, `fern` logging setup and `CustomError`.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating `config.toml`.
pub mod config;

/// SSL certificate bundle module.
///
/// Provides the directory-backed `CertificateStore`, the
/// `CertificateValidator` that extracts hostnames, and their error types.
pub mod ssl;

/// CLI argument parsing.
///
/// Defines the command-line interface of the operator binary.
pub mod structs;
