use crate::ssl::enums::bundle_name_error::BundleNameError;
use crate::ssl::ssl::{BUNDLE_EXTENSION, MAX_BUNDLE_NAME_LENGTH};
use crate::ssl::structs::bundle_name::BundleName;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

impl BundleName {
    pub fn new(name: &str) -> Result<BundleName, BundleNameError> {
        if name.is_empty() {
            return Err(BundleNameError::Empty);
        }
        if name.len() > MAX_BUNDLE_NAME_LENGTH {
            return Err(BundleNameError::TooLong(name.len(), MAX_BUNDLE_NAME_LENGTH));
        }
        if name.contains(['/', '\\']) {
            return Err(BundleNameError::PathSeparator(name.to_string()));
        }
        if name.contains("..") {
            return Err(BundleNameError::Traversal(name.to_string()));
        }
        if name.chars().any(char::is_control) {
            return Err(BundleNameError::ControlCharacter(name.escape_default().to_string()));
        }
        Ok(BundleName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<name>.pem`, the file this bundle lives in.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, BUNDLE_EXTENSION)
    }

    /// Inverse of [`BundleName::file_name`]. Returns `None` for anything that
    /// is not a `.pem` artifact with a valid stem.
    pub fn from_file_name(file_name: &str) -> Option<BundleName> {
        let stem = file_name.strip_suffix(BUNDLE_EXTENSION)?.strip_suffix('.')?;
        BundleName::new(stem).ok()
    }
}

impl fmt::Display for BundleName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BundleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BundleName {
    type Err = BundleNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BundleName::new(s)
    }
}

impl TryFrom<&str> for BundleName {
    type Error = BundleNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        BundleName::new(value)
    }
}

impl TryFrom<String> for BundleName {
    type Error = BundleNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BundleName::new(&value)
    }
}
