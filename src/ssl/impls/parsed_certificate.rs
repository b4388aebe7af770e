use crate::ssl::structs::parsed_certificate::ParsedCertificate;

impl ParsedCertificate {
    /// CommonName first (possibly empty), then every DNS SAN in certificate
    /// order. Nothing is deduplicated or sorted.
    pub fn hostnames(&self) -> Vec<String> {
        std::iter::once(self.common_name.clone())
            .chain(self.subject_alternative_names.iter().cloned())
            .collect()
    }

    pub fn into_hostnames(self) -> Vec<String> {
        let mut hostnames = Vec::with_capacity(self.subject_alternative_names.len() + 1);
        hostnames.push(self.common_name);
        hostnames.extend(self.subject_alternative_names);
        hostnames
    }
}
