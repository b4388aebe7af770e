use serde::{Deserialize, Serialize};

/// Subject information read from a bundle's leaf certificate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCertificate {
    pub common_name: String,
    pub subject_alternative_names: Vec<String>,
}
