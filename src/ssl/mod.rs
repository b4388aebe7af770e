//! SSL certificate bundle storage and validation.
//!
//! This module persists certificate/key bundles for named endpoints and
//! reports which hostnames a stored bundle authorizes. It is the component
//! the rest of an ingress setup asks "is there a valid certificate for X, and
//! what does it cover".
//!
//! # Storage Layout
//!
//! Each bundle lives in a single file inside the store directory:
//!
//! - Path: `<directory>/<name>.pem`
//! - Content: `<key PEM>\n<certificate PEM chain>`
//!
//! Writes go through a temporary file in the same directory followed by an
//! atomic rename, so readers never observe a partially written bundle.
//! There is no in-memory cache; every validation re-reads the file.
//!
//! # Validation
//!
//! Validation decodes PEM sections in order and uses the first `CERTIFICATE`
//! section that parses as X.509. The result is the CommonName followed by
//! the DNS subject alternative names of that certificate.
//!
//! # Example
//!
//! ```rust,ignore
//! use ingress_ssl_store::ssl::structs::certificate_store::CertificateStore;
//! use ingress_ssl_store::ssl::structs::certificate_validator::CertificateValidator;
//!
//! let store = CertificateStore::open("/etc/nginx-ssl")?;
//! store.put("default-example-tls", &cert_pem, &key_pem)?;
//!
//! let validator = CertificateValidator::for_store(&store);
//! let hostnames = validator.validate("default-example-tls")?;
//! ```

/// Error enumerations for names, storage and validation.
pub mod enums;

/// Implementation blocks for the SSL structs.
pub mod impls;

/// Constants and constructors shared by the SSL module.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Data structures: bundle, name, store, validator, parsed certificate.
pub mod structs;

/// Unit tests for the SSL module.
pub mod tests;
