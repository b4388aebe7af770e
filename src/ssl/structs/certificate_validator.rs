use crate::ssl::structs::certificate_store::CertificateStore;

/// Decodes stored bundles and reports the hostnames they cover.
#[derive(Debug, Clone)]
pub struct CertificateValidator {
    pub(crate) store: CertificateStore,
}
