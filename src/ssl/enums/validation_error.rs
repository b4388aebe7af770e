use crate::ssl::enums::bundle_name_error::BundleNameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid bundle name: {0}")]
    InvalidName(#[from] BundleNameError),
    #[error("Certificate bundle '{name}' not found at {}: {source}", .path.display())]
    NotFound {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed PEM in bundle '{name}': {reason}")]
    MalformedPem {
        name: String,
        reason: String,
    },
    #[error("Invalid certificate in bundle '{name}': {reason}")]
    InvalidCertificate {
        name: String,
        reason: String,
    },
}
