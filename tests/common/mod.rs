#![allow(dead_code)]
use ingress_ssl_store::config::structs::configuration::Configuration;
use ingress_ssl_store::ssl::structs::certificate_store::CertificateStore;
use ingress_ssl_store::ssl::structs::certificate_validator::CertificateValidator;
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use tempfile::TempDir;

pub struct TestCertificate {
    pub certificate_pem: String,
    pub key_pem: String,
}

pub fn generate_certificate(common_name: Option<&str>, dns_names: &[&str]) -> TestCertificate {
    let mut params = CertificateParams::new(
        dns_names.iter().map(|name| name.to_string()).collect::<Vec<_>>()
    ).expect("valid certificate params");
    params.distinguished_name = DistinguishedName::new();
    if let Some(common_name) = common_name {
        params.distinguished_name.push(DnType::CommonName, common_name);
    }
    let key_pair = KeyPair::generate().expect("key generation");
    let certificate = params.self_signed(&key_pair).expect("self-signed certificate");
    TestCertificate {
        certificate_pem: certificate.pem(),
        key_pem: key_pair.serialize_pem(),
    }
}

pub fn create_test_store() -> (TempDir, CertificateStore) {
    let temp_dir = TempDir::new().expect("temp dir");
    let store = CertificateStore::new(temp_dir.path());
    (temp_dir, store)
}

pub fn create_test_validator(store: &CertificateStore) -> CertificateValidator {
    CertificateValidator::for_store(store)
}

pub fn create_test_config(directory: &str) -> Configuration {
    let mut config = Configuration::init();
    config.store.directory = directory.to_string();
    config
}

pub fn directory_entries(temp_dir: &TempDir) -> Vec<String> {
    let mut entries: Vec<String> = std::fs::read_dir(temp_dir.path())
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    entries.sort();
    entries
}
