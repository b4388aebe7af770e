use crate::ssl::structs::bundle_name::BundleName;

#[derive(Clone)]
pub struct CertificateBundle {
    pub name: BundleName,
    pub certificate_pem: String,
    pub key_pem: String,
}
