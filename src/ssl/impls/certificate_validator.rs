use crate::ssl::enums::storage_error::StorageError;
use crate::ssl::enums::validation_error::ValidationError;
use crate::ssl::structs::bundle_name::BundleName;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::certificate_validator::CertificateValidator;
use crate::ssl::structs::parsed_certificate::ParsedCertificate;
use log::{debug, warn};
use rustls_pemfile::Item;
use std::path::PathBuf;
use x509_parser::asn1_rs::Tag;
use x509_parser::prelude::{AttributeTypeAndValue, FromDer, GeneralName, X509Certificate};

pub type ValidationResults = Vec<(BundleName, Result<Vec<String>, ValidationError>)>;

impl CertificateValidator {
    pub fn new(directory: impl Into<PathBuf>) -> CertificateValidator {
        CertificateValidator {
            store: CertificateStore::new(directory),
        }
    }

    pub fn for_store(store: &CertificateStore) -> CertificateValidator {
        CertificateValidator {
            store: store.clone(),
        }
    }

    pub fn store(&self) -> &CertificateStore {
        &self.store
    }

    /// Hostnames authorized by the bundle stored under `name`: the leaf's
    /// CommonName followed by its DNS subject alternative names.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn validate(&self, name: &str) -> Result<Vec<String>, ValidationError> {
        let hostnames = self.inspect(name)?.into_hostnames();
        debug!(
            "[VALIDATE] Bundle {} covers {} hostname(s): {:?}",
            name,
            hostnames.len(),
            hostnames
        );
        Ok(hostnames)
    }

    pub fn inspect(&self, name: &str) -> Result<ParsedCertificate, ValidationError> {
        let bundle_name = BundleName::new(name)?;
        let artifact = self.store.read_artifact(&bundle_name).map_err(|source| {
            ValidationError::NotFound {
                name: name.to_string(),
                path: self.store.path_for(&bundle_name),
                source,
            }
        })?;
        Self::parse_artifact(name, &artifact)
    }

    /// Validates every stored bundle. A failing bundle only affects its own
    /// entry; the listing itself is the only thing that can fail as a whole.
    pub fn validate_all(&self) -> Result<ValidationResults, StorageError> {
        let names = self.store.list()?;
        Ok(names
            .into_iter()
            .map(|name| {
                let result = self.validate(name.as_str());
                if let Err(error) = &result {
                    warn!("[VALIDATE] {}", error);
                }
                (name, result)
            })
            .collect())
    }

    /// Decodes an artifact held in memory.
    ///
    /// PEM sections are read in order and the first `CERTIFICATE` section
    /// that parses as X.509 is taken as the leaf, so key-first and cert-first
    /// artifacts both work. Key, CSR, CRL and unknown sections are skipped.
    /// Once a leaf is found, a subject or SAN that cannot be read fails the
    /// bundle; later certificates are never consulted.
    pub fn parse_artifact(name: &str, artifact: &[u8]) -> Result<ParsedCertificate, ValidationError> {
        let mut reader = artifact;
        let mut pem_failure: Option<String> = None;
        let mut certificate_failure: Option<String> = None;

        for item in rustls_pemfile::read_all(&mut reader) {
            match item {
                Ok(Item::X509Certificate(der)) => match X509Certificate::from_der(der.as_ref()) {
                    Ok((_, certificate)) => {
                        return Self::extract_hostnames(&certificate).map_err(|reason| {
                            ValidationError::InvalidCertificate {
                                name: name.to_string(),
                                reason,
                            }
                        });
                    }
                    Err(e) => {
                        debug!("[VALIDATE] Skipping unparseable certificate section in {}: {}", name, e);
                        certificate_failure.get_or_insert(format!("X.509 parse error: {e}"));
                    }
                },
                Ok(_) => {}
                Err(error) => {
                    debug!("[VALIDATE] Undecodable PEM section in {}: {}", name, error);
                    pem_failure.get_or_insert(error.to_string());
                }
            }
        }

        if let Some(reason) = certificate_failure {
            return Err(ValidationError::InvalidCertificate {
                name: name.to_string(),
                reason,
            });
        }
        if let Some(reason) = pem_failure {
            return Err(ValidationError::MalformedPem {
                name: name.to_string(),
                reason,
            });
        }
        if Self::count_sections(artifact) > 0 {
            return Err(ValidationError::InvalidCertificate {
                name: name.to_string(),
                reason: "no CERTIFICATE section found".to_string(),
            });
        }
        Err(ValidationError::MalformedPem {
            name: name.to_string(),
            reason: "no PEM section found".to_string(),
        })
    }

    /// Number of complete `-----BEGIN <label>-----` / `-----END <label>-----`
    /// pairs, whatever the label.
    fn count_sections(artifact: &[u8]) -> usize {
        let mut open_label: Option<&[u8]> = None;
        let mut sections = 0usize;
        for line in artifact.split(|byte| *byte == b'\n') {
            let line = line.trim_ascii_end();
            let Some(rest) = line.strip_suffix(b"-----") else {
                continue;
            };
            if let Some(label) = rest.strip_prefix(b"-----BEGIN ") {
                open_label = Some(label);
            } else if let Some(label) = rest.strip_prefix(b"-----END ") {
                if open_label == Some(label) {
                    sections += 1;
                }
                open_label = None;
            }
        }
        sections
    }

    fn extract_hostnames(certificate: &X509Certificate) -> Result<ParsedCertificate, String> {
        // Last CN wins when the subject carries several.
        let common_name = match certificate.subject().iter_common_name().last() {
            Some(attribute) => Self::attribute_string(attribute)
                .map_err(|e| format!("unreadable CommonName: {e}"))?,
            None => String::new(),
        };

        let subject_alternative_names = match certificate.subject_alternative_name() {
            Ok(Some(extension)) => extension
                .value
                .general_names
                .iter()
                .filter_map(|general_name| match general_name {
                    GeneralName::DNSName(dns_name) => Some(dns_name.to_string()),
                    _ => None,
                })
                .collect(),
            Ok(None) => Vec::new(),
            Err(e) => return Err(format!("unreadable subjectAltName extension: {e}")),
        };

        Ok(ParsedCertificate {
            common_name,
            subject_alternative_names,
        })
    }

    /// Directory string value as UTF-8. BMPString is UTF-16BE,
    /// UniversalString is UCS-4 and TeletexString is read as Latin-1.
    fn attribute_string(attribute: &AttributeTypeAndValue) -> Result<String, String> {
        if let Ok(value) = attribute.as_str() {
            return Ok(value.to_string());
        }
        let value = attribute.attr_value();
        let data = value.data;
        match value.tag() {
            Tag::BmpString => {
                if data.len() % 2 != 0 {
                    return Err(format!("BMPString of odd length {}", data.len()));
                }
                let units: Vec<u16> = data
                    .chunks_exact(2)
                    .map(|unit| u16::from_be_bytes([unit[0], unit[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|e| format!("invalid BMPString: {e}"))
            }
            Tag::UniversalString => {
                if data.len() % 4 != 0 {
                    return Err(format!("UniversalString length {} is not a multiple of 4", data.len()));
                }
                data.chunks_exact(4)
                    .map(|unit| {
                        let code_point = u32::from_be_bytes([unit[0], unit[1], unit[2], unit[3]]);
                        char::from_u32(code_point)
                            .ok_or_else(|| format!("invalid UniversalString code point {code_point:#x}"))
                    })
                    .collect()
            }
            Tag::TeletexString => Ok(data.iter().map(|&byte| char::from(byte)).collect()),
            Tag::VisibleString => std::str::from_utf8(data)
                .map(str::to_string)
                .map_err(|e| format!("invalid VisibleString: {e}")),
            tag => Err(format!("unsupported string type {:?}", tag)),
        }
    }
}
