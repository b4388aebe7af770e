use crate::config::structs::store_config::StoreConfig;
use crate::ssl::enums::storage_error::StorageError;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::certificate_validator::CertificateValidator;
use std::sync::Arc;

pub const BUNDLE_EXTENSION: &str = "pem";

/// 255-byte file name limit minus `.pem`.
pub const MAX_BUNDLE_NAME_LENGTH: usize = 251;

pub const TEMP_FILE_PREFIX: &str = ".bundle-";
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

pub fn create_certificate_store(config: &StoreConfig) -> Result<Arc<CertificateStore>, StorageError> {
    let store = if config.create_directory {
        CertificateStore::open(&config.directory)?
    } else {
        CertificateStore::new(&config.directory)
    };
    Ok(Arc::new(store))
}

pub fn create_certificate_validator(store: &CertificateStore) -> Arc<CertificateValidator> {
    Arc::new(CertificateValidator::for_store(store))
}
