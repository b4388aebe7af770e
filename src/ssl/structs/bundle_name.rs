//! Validated bundle identifier.

/// The name a certificate bundle is stored under.
///
/// A `BundleName` can only be built through [`BundleName::new`] (or
/// `FromStr`/`TryFrom`), which rejects anything that could escape the
/// storage directory once it is turned into `<name>.pem`:
///
/// - empty names
/// - names longer than 251 bytes
/// - `/` or `\`
/// - `..`
/// - control characters, including NUL
///
/// # Example
///
/// ```rust
/// use ingress_ssl_store::ssl::structs::bundle_name::BundleName;
///
/// let name = BundleName::new("default-example-tls").unwrap();
/// assert_eq!(name.file_name(), "default-example-tls.pem");
/// assert!(BundleName::new("../etc/passwd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BundleName(pub(crate) String);
