//! SSL data structures.

/// Path-safe bundle identifier.
pub mod bundle_name;

/// Certificate chain and private key stored under one name.
pub mod certificate_bundle;

/// Directory-backed bundle store.
pub mod certificate_store;

/// Reads stored bundles and extracts hostnames.
pub mod certificate_validator;

/// CommonName and DNS SANs of a leaf certificate.
pub mod parsed_certificate;
