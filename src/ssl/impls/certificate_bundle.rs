use crate::ssl::enums::bundle_name_error::BundleNameError;
use crate::ssl::structs::bundle_name::BundleName;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("name", &self.name)
            .field("certificate_pem_len", &self.certificate_pem.len())
            .field("key_pem_len", &self.key_pem.len())
            .finish()
    }
}

impl CertificateBundle {
    pub fn new(
        name: &str,
        certificate_pem: impl Into<String>,
        key_pem: impl Into<String>,
    ) -> Result<CertificateBundle, BundleNameError> {
        Ok(CertificateBundle {
            name: BundleName::new(name)?,
            certificate_pem: certificate_pem.into(),
            key_pem: key_pem.into(),
        })
    }

    /// The exact bytes written to disk: key, one newline, certificate chain.
    pub fn artifact(&self) -> String {
        format!("{}\n{}", self.key_pem, self.certificate_pem)
    }
}
