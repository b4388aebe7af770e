use crate::ssl::enums::storage_error::StorageError;
use crate::ssl::ssl::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::ssl::structs::bundle_name::BundleName;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use log::{debug, info, warn};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

impl CertificateStore {
    /// Builds a store over `directory` without touching the filesystem.
    pub fn new(directory: impl Into<PathBuf>) -> CertificateStore {
        CertificateStore {
            directory: directory.into(),
        }
    }

    /// Builds a store over `directory`, creating it when missing.
    pub fn open(directory: impl Into<PathBuf>) -> Result<CertificateStore, StorageError> {
        let directory = directory.into();
        fs::create_dir_all(&directory).map_err(|source| StorageError::DirectoryUnavailable {
            path: directory.clone(),
            source,
        })?;
        Ok(CertificateStore { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, name: &BundleName) -> PathBuf {
        self.directory.join(name.file_name())
    }

    /// Stores `key_pem`, a newline and `certificate_pem` as `<name>.pem`,
    /// replacing any previous artifact for `name`.
    ///
    /// The content goes to a temporary file in the same directory first and
    /// is renamed over the final path once flushed, so concurrent readers see
    /// either the previous artifact or the new one in full.
    #[tracing::instrument(level = "debug", skip(self, certificate_pem, key_pem))]
    pub fn put(
        &self,
        name: &str,
        certificate_pem: &str,
        key_pem: &str,
    ) -> Result<PathBuf, StorageError> {
        let name = BundleName::new(name)?;
        self.write_artifact(&name, certificate_pem, key_pem)
    }

    pub fn put_bundle(&self, bundle: &CertificateBundle) -> Result<PathBuf, StorageError> {
        self.write_artifact(&bundle.name, &bundle.certificate_pem, &bundle.key_pem)
    }

    /// Raw artifact bytes, read fresh from disk.
    pub fn read_artifact(&self, name: &BundleName) -> std::io::Result<Vec<u8>> {
        fs::read(self.path_for(name))
    }

    pub fn contains(&self, name: &str) -> Result<bool, StorageError> {
        let name = BundleName::new(name)?;
        Ok(self.path_for(&name).is_file())
    }

    /// Removes the artifact for `name`. Returns `false` if there was none.
    pub fn delete(&self, name: &str) -> Result<bool, StorageError> {
        let name = BundleName::new(name)?;
        let path = self.path_for(&name);
        match fs::remove_file(&path) {
            Ok(()) => {
                self.sync_directory();
                info!("[STORE] Deleted bundle {} ({})", name, path.display());
                Ok(true)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("[STORE] Nothing to delete for bundle {}", name);
                Ok(false)
            }
            Err(source) => Err(StorageError::DeleteFailed { path, source }),
        }
    }

    /// Every stored bundle, sorted by name. Temporary files and anything that
    /// is not a `<name>.pem` file are skipped.
    pub fn list(&self) -> Result<Vec<BundleName>, StorageError> {
        let list_failed = |source: std::io::Error| StorageError::ListFailed {
            path: self.directory.clone(),
            source,
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(list_failed)? {
            let entry = entry.map_err(list_failed)?;
            if !entry.file_type().map_err(list_failed)?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str().and_then(BundleName::from_file_name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn write_artifact(
        &self,
        name: &BundleName,
        certificate_pem: &str,
        key_pem: &str,
    ) -> Result<PathBuf, StorageError> {
        let path = self.path_for(name);
        let write_failed = |source: std::io::Error| StorageError::WriteFailed {
            path: path.clone(),
            source,
        };

        // Dropping the temp file on any early return removes it.
        let mut temp_file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(TEMP_FILE_SUFFIX)
            .tempfile_in(&self.directory)
            .map_err(write_failed)?;
        temp_file.write_all(key_pem.as_bytes()).map_err(write_failed)?;
        temp_file.write_all(b"\n").map_err(write_failed)?;
        temp_file.write_all(certificate_pem.as_bytes()).map_err(write_failed)?;
        temp_file.as_file().sync_all().map_err(write_failed)?;
        temp_file
            .persist(&path)
            .map_err(|error| write_failed(error.error))?;
        self.sync_directory();

        info!("[STORE] Stored bundle {} at {}", name, path.display());
        Ok(path)
    }

    #[cfg(unix)]
    fn sync_directory(&self) {
        if let Err(error) = fs::File::open(&self.directory).and_then(|dir| dir.sync_all()) {
            warn!(
                "[STORE] Unable to sync directory {}: {}",
                self.directory.display(),
                error
            );
        }
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) {}
}
