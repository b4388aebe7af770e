//! Implementation blocks for the SSL data structures.

pub mod bundle_name;

pub mod certificate_bundle;

/// Atomic writes, deletes and listing.
pub mod certificate_store;

/// PEM scanning and X.509 subject extraction.
pub mod certificate_validator;

pub mod parsed_certificate;
