//! Error enumerations for the SSL module.

/// Reasons a bundle name is refused.
pub mod bundle_name_error;

/// Failures while writing, deleting or listing bundles.
pub mod storage_error;

/// Failures while reading and decoding a stored bundle.
pub mod validation_error;
