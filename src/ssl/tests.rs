#[cfg(test)]
mod ssl_tests {
    use rcgen::{CertificateParams, DistinguishedName, DnType, DnValue, KeyPair};

    fn generate_pem(common_name: Option<&str>, dns_names: &[&str]) -> (String, String) {
        generate_pem_with_value(common_name.map(|value| DnValue::Utf8String(value.to_string())), dns_names)
    }

    fn generate_pem_with_value(common_name: Option<DnValue>, dns_names: &[&str]) -> (String, String) {
        let mut params = CertificateParams::new(
            dns_names.iter().map(|name| name.to_string()).collect::<Vec<_>>()
        ).unwrap();
        params.distinguished_name = DistinguishedName::new();
        if let Some(common_name) = common_name {
            params.distinguished_name.push(DnType::CommonName, common_name);
        }
        let key_pair = KeyPair::generate().unwrap();
        let certificate = params.self_signed(&key_pair).unwrap();
        (certificate.pem(), key_pair.serialize_pem())
    }

    mod bundle_name_tests {
        use crate::ssl::enums::bundle_name_error::BundleNameError;
        use crate::ssl::ssl::MAX_BUNDLE_NAME_LENGTH;
        use crate::ssl::structs::bundle_name::BundleName;

        #[test]
        fn test_bundle_name_accepts_secret_style_names() {
            for name in ["default-example-tls", "kube-system.dashboard", "a", "CERT_01", "tls.v2"] {
                let bundle_name = BundleName::new(name).unwrap();
                assert_eq!(bundle_name.as_str(), name);
                assert_eq!(bundle_name.to_string(), name);
            }
        }

        #[test]
        fn test_bundle_name_rejects_empty() {
            assert_eq!(BundleName::new(""), Err(BundleNameError::Empty));
        }

        #[test]
        fn test_bundle_name_rejects_separators() {
            assert!(matches!(BundleName::new("default/tls"), Err(BundleNameError::PathSeparator(_))));
            assert!(matches!(BundleName::new("default\\tls"), Err(BundleNameError::PathSeparator(_))));
            assert!(matches!(BundleName::new("/etc/passwd"), Err(BundleNameError::PathSeparator(_))));
        }

        #[test]
        fn test_bundle_name_rejects_traversal() {
            assert!(matches!(BundleName::new(".."), Err(BundleNameError::Traversal(_))));
            assert!(matches!(BundleName::new("a..b"), Err(BundleNameError::Traversal(_))));
            assert!(matches!(BundleName::new("../secret"), Err(BundleNameError::PathSeparator(_))));
        }

        #[test]
        fn test_bundle_name_rejects_control_characters() {
            assert!(matches!(BundleName::new("tls\0"), Err(BundleNameError::ControlCharacter(_))));
            assert!(matches!(BundleName::new("tls\nname"), Err(BundleNameError::ControlCharacter(_))));
        }

        #[test]
        fn test_bundle_name_length_limit() {
            let longest = "a".repeat(MAX_BUNDLE_NAME_LENGTH);
            assert!(BundleName::new(&longest).is_ok());
            let too_long = "a".repeat(MAX_BUNDLE_NAME_LENGTH + 1);
            assert_eq!(
                BundleName::new(&too_long),
                Err(BundleNameError::TooLong(MAX_BUNDLE_NAME_LENGTH + 1, MAX_BUNDLE_NAME_LENGTH))
            );
        }

        #[test]
        fn test_bundle_name_file_name_round_trip() {
            let name = BundleName::new("default-example-tls").unwrap();
            assert_eq!(name.file_name(), "default-example-tls.pem");
            assert_eq!(BundleName::from_file_name("default-example-tls.pem"), Some(name));
        }

        #[test]
        fn test_bundle_name_from_file_name_ignores_foreign_files() {
            assert_eq!(BundleName::from_file_name("notes.txt"), None);
            assert_eq!(BundleName::from_file_name(".bundle-abc123.tmp"), None);
            assert_eq!(BundleName::from_file_name(".pem"), None);
            assert_eq!(BundleName::from_file_name("pem"), None);
        }

        #[test]
        fn test_bundle_name_conversions() {
            let parsed: BundleName = "web".parse().unwrap();
            let from_str = BundleName::try_from("web").unwrap();
            let from_string = BundleName::try_from(String::from("web")).unwrap();
            assert_eq!(parsed, from_str);
            assert_eq!(from_str, from_string);
            assert!("a/b".parse::<BundleName>().is_err());
        }

        #[test]
        fn test_bundle_name_error_display() {
            let error = BundleName::new("../x").unwrap_err();
            assert_eq!(error.to_string(), "Bundle name '../x' contains a path separator");
            assert_eq!(BundleNameError::Empty.to_string(), "Bundle name is empty");
        }
    }

    mod bundle_name_properties {
        use crate::ssl::structs::bundle_name::BundleName;
        use crate::ssl::structs::certificate_store::CertificateStore;
        use proptest::prelude::*;
        use std::path::Path;

        proptest! {
            #[test]
            fn accepted_names_stay_inside_the_directory(name in "[a-zA-Z0-9][a-zA-Z0-9._-]{0,60}") {
                prop_assume!(!name.contains(".."));
                let bundle_name = BundleName::new(&name).unwrap();
                let store = CertificateStore::new("/srv/ssl");
                let path = store.path_for(&bundle_name);
                prop_assert_eq!(path.parent(), Some(Path::new("/srv/ssl")));
                prop_assert_eq!(BundleName::from_file_name(&bundle_name.file_name()), Some(bundle_name));
            }

            #[test]
            fn names_with_separators_are_rejected(prefix in "[a-z.]{0,10}", suffix in "[a-z.]{0,10}", separator in prop::sample::select(vec!['/', '\\'])) {
                let name = format!("{prefix}{separator}{suffix}");
                prop_assert!(BundleName::new(&name).is_err());
            }
        }
    }

    mod certificate_bundle_tests {
        use crate::ssl::structs::certificate_bundle::CertificateBundle;

        #[test]
        fn test_bundle_artifact_is_key_newline_certificate() {
            let bundle = CertificateBundle::new("web", "CERT", "KEY").unwrap();
            assert_eq!(bundle.artifact(), "KEY\nCERT");
        }

        #[test]
        fn test_bundle_debug_hides_key_material() {
            let bundle = CertificateBundle::new("web", "CERTIFICATE-DATA", "SECRET-KEY-DATA").unwrap();
            let debug_str = format!("{:?}", bundle);
            assert!(debug_str.contains("web"));
            assert!(debug_str.contains("key_pem_len"));
            assert!(!debug_str.contains("SECRET-KEY-DATA"));
            assert!(!debug_str.contains("CERTIFICATE-DATA"));
        }

        #[test]
        fn test_bundle_rejects_invalid_name() {
            assert!(CertificateBundle::new("../web", "CERT", "KEY").is_err());
        }
    }

    mod parsed_certificate_tests {
        use crate::ssl::structs::parsed_certificate::ParsedCertificate;

        #[test]
        fn test_hostnames_common_name_first() {
            let parsed = ParsedCertificate {
                common_name: String::from("example.com"),
                subject_alternative_names: vec![String::from("www.example.com"), String::from("api.example.com")],
            };
            assert_eq!(parsed.hostnames(), vec!["example.com", "www.example.com", "api.example.com"]);
            assert_eq!(parsed.clone().into_hostnames(), parsed.hostnames());
        }

        #[test]
        fn test_hostnames_keep_empty_common_name_and_duplicates() {
            let parsed = ParsedCertificate {
                common_name: String::new(),
                subject_alternative_names: vec![String::from("a.example.com"), String::from("a.example.com")],
            };
            assert_eq!(parsed.into_hostnames(), vec!["", "a.example.com", "a.example.com"]);
        }

        #[test]
        fn test_hostnames_without_sans() {
            let parsed = ParsedCertificate::default();
            assert_eq!(parsed.hostnames(), vec![String::new()]);
        }
    }

    mod parse_artifact_tests {
        use super::{generate_pem, generate_pem_with_value};
        use rcgen::DnValue;
        use rcgen::string::{BmpString, TeletexString, UniversalString};
        use crate::ssl::enums::validation_error::ValidationError;
        use crate::ssl::structs::certificate_validator::CertificateValidator;

        const CORRUPT_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";

        #[test]
        fn test_parse_key_first_artifact() {
            let (certificate_pem, key_pem) = generate_pem(Some("example.com"), &["www.example.com"]);
            let artifact = format!("{}\n{}", key_pem, certificate_pem);
            let parsed = CertificateValidator::parse_artifact("web", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.common_name, "example.com");
            assert_eq!(parsed.subject_alternative_names, vec!["www.example.com"]);
        }

        #[test]
        fn test_parse_certificate_first_artifact() {
            let (certificate_pem, key_pem) = generate_pem(Some("example.com"), &["www.example.com"]);
            let artifact = format!("{}\n{}", certificate_pem, key_pem);
            let parsed = CertificateValidator::parse_artifact("web", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.hostnames(), vec!["example.com", "www.example.com"]);
        }

        #[test]
        fn test_parse_uses_leaf_of_chain() {
            let (leaf_pem, key_pem) = generate_pem(Some("leaf.example.com"), &["leaf-alt.example.com"]);
            let (intermediate_pem, _) = generate_pem(Some("Intermediate CA"), &["ca.example.com"]);
            let artifact = format!("{}\n{}\n{}", key_pem, leaf_pem, intermediate_pem);
            let parsed = CertificateValidator::parse_artifact("web", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.hostnames(), vec!["leaf.example.com", "leaf-alt.example.com"]);
        }

        #[test]
        fn test_parse_skips_corrupt_certificate_section() {
            let (certificate_pem, key_pem) = generate_pem(Some("example.com"), &[]);
            let artifact = format!("{}\n{}\n{}", key_pem, CORRUPT_CERTIFICATE, certificate_pem);
            let parsed = CertificateValidator::parse_artifact("web", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.hostnames(), vec!["example.com"]);
        }

        #[test]
        fn test_parse_ignores_ip_address_sans() {
            let (certificate_pem, _) = generate_pem(Some("example.com"), &["www.example.com", "10.0.0.1"]);
            let parsed = CertificateValidator::parse_artifact("web", certificate_pem.as_bytes()).unwrap();
            assert_eq!(parsed.subject_alternative_names, vec!["www.example.com"]);
        }

        #[test]
        fn test_parse_plain_text_is_malformed() {
            let result = CertificateValidator::parse_artifact("bad", b"not a pem\nnot a pem");
            assert!(matches!(result, Err(ValidationError::MalformedPem { .. })));
        }

        #[test]
        fn test_parse_empty_artifact_is_malformed() {
            let result = CertificateValidator::parse_artifact("empty", b"\n");
            assert!(matches!(result, Err(ValidationError::MalformedPem { .. })));
        }

        #[test]
        fn test_parse_unterminated_section_is_malformed() {
            let result = CertificateValidator::parse_artifact("cut", b"-----BEGIN CERTIFICATE-----\nMIIB\n");
            assert!(matches!(result, Err(ValidationError::MalformedPem { .. })));
        }

        #[test]
        fn test_parse_corrupt_der_is_invalid_certificate() {
            let result = CertificateValidator::parse_artifact("corrupt", CORRUPT_CERTIFICATE.as_bytes());
            match result {
                Err(ValidationError::InvalidCertificate { name, reason }) => {
                    assert_eq!(name, "corrupt");
                    assert!(reason.contains("X.509"));
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn test_parse_bmp_string_common_name() {
            let common_name = DnValue::BmpString(BmpString::try_from("leaf.example.com").unwrap());
            let (certificate_pem, key_pem) = generate_pem_with_value(Some(common_name), &["www.leaf.example.com"]);
            let artifact = format!("{}\n{}", key_pem, certificate_pem);
            let parsed = CertificateValidator::parse_artifact("bmp", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.hostnames(), vec!["leaf.example.com", "www.leaf.example.com"]);
        }

        #[test]
        fn test_parse_bmp_string_leaf_of_chain() {
            let common_name = DnValue::BmpString(BmpString::try_from("leaf.example.com").unwrap());
            let (leaf_pem, key_pem) = generate_pem_with_value(Some(common_name), &[]);
            let (intermediate_pem, _) = generate_pem(Some("Intermediate CA"), &["ca.example.com"]);
            let artifact = format!("{}\n{}\n{}", key_pem, leaf_pem, intermediate_pem);
            let parsed = CertificateValidator::parse_artifact("bmp-chain", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.hostnames(), vec!["leaf.example.com"]);
        }

        #[test]
        fn test_parse_teletex_string_leaf_of_chain() {
            let common_name = DnValue::TeletexString(TeletexString::try_from("leaf.example.com").unwrap());
            let (leaf_pem, key_pem) = generate_pem_with_value(Some(common_name), &["alt.example.com"]);
            let (intermediate_pem, _) = generate_pem(Some("Intermediate CA"), &["ca.example.com"]);
            let artifact = format!("{}\n{}\n{}", key_pem, leaf_pem, intermediate_pem);
            let parsed = CertificateValidator::parse_artifact("t61-chain", artifact.as_bytes()).unwrap();
            assert_eq!(parsed.hostnames(), vec!["leaf.example.com", "alt.example.com"]);
        }

        #[test]
        fn test_parse_universal_string_common_name() {
            let common_name = DnValue::UniversalString(UniversalString::try_from("ünïcode.example.com").unwrap());
            let (certificate_pem, _) = generate_pem_with_value(Some(common_name), &[]);
            let parsed = CertificateValidator::parse_artifact("ucs4", certificate_pem.as_bytes()).unwrap();
            assert_eq!(parsed.common_name, "ünïcode.example.com");
        }

        #[test]
        fn test_parse_unknown_label_is_invalid_certificate() {
            let result = CertificateValidator::parse_artifact("x", b"-----BEGIN FOO-----\nAAAA\n-----END FOO-----\n");
            match result {
                Err(ValidationError::InvalidCertificate { name, reason }) => {
                    assert_eq!(name, "x");
                    assert_eq!(reason, "no CERTIFICATE section found");
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn test_parse_unterminated_unknown_label_is_malformed() {
            let result = CertificateValidator::parse_artifact("x", b"-----BEGIN FOO-----\nAAAA\n");
            assert!(matches!(result, Err(ValidationError::MalformedPem { .. })));
        }

        #[test]
        fn test_parse_key_only_is_invalid_certificate() {
            let (_, key_pem) = generate_pem(Some("example.com"), &[]);
            let result = CertificateValidator::parse_artifact("key-only", key_pem.as_bytes());
            assert!(matches!(result, Err(ValidationError::InvalidCertificate { .. })));
        }
    }

    mod error_tests {
        use crate::ssl::enums::storage_error::StorageError;
        use crate::ssl::enums::validation_error::ValidationError;
        use std::io::{Error, ErrorKind};
        use std::path::PathBuf;

        #[test]
        fn test_storage_error_display() {
            let error = StorageError::WriteFailed {
                path: PathBuf::from("/srv/ssl/web.pem"),
                source: Error::new(ErrorKind::PermissionDenied, "permission denied"),
            };
            assert_eq!(error.to_string(), "Failed to write bundle /srv/ssl/web.pem: permission denied");
            assert!(std::error::Error::source(&error).is_some());
        }

        #[test]
        fn test_validation_error_display() {
            let error = ValidationError::MalformedPem {
                name: String::from("bad"),
                reason: String::from("no PEM section found"),
            };
            assert_eq!(error.to_string(), "Malformed PEM in bundle 'bad': no PEM section found");
            let error = ValidationError::InvalidCertificate {
                name: String::from("bad"),
                reason: String::from("X.509 parse error"),
            };
            assert!(error.to_string().contains("Invalid certificate"));
        }

        #[test]
        fn test_error_debug() {
            let error = ValidationError::NotFound {
                name: String::from("missing"),
                path: PathBuf::from("/srv/ssl/missing.pem"),
                source: Error::from(ErrorKind::NotFound),
            };
            let debug_str = format!("{:?}", error);
            assert!(debug_str.contains("NotFound"));
            assert!(debug_str.contains("missing"));
        }
    }
}
