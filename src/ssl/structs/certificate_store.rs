use std::path::PathBuf;

/// Directory-backed mapping of bundle names to `<name>.pem` artifacts.
///
/// Holds nothing but the directory, so clones are cheap and every read goes
/// to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateStore {
    pub(crate) directory: PathBuf,
}
