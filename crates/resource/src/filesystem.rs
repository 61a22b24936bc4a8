//! Filesystem-backed object store for native platforms.
//!
//! Stands in for a remote bucket: uploads land under `<root>/<bucket>/`,
//! public visibility is a sidecar marker, and URLs use the `file://` scheme.
//!
//! # Security
//!
//! Remote paths are validated so an object can never be written outside the
//! bucket directory (e.g. `../../../etc/passwd`).

use log::debug;
use receipt_traits::{ObjectHandle, ObjectStore, StorageError};
use std::path::{Component, Path, PathBuf};

const PUBLIC_MARKER_SUFFIX: &str = ".public";

#[derive(Debug)]
pub struct FilesystemObjectStore {
    root: PathBuf,
    bucket: String,
}

impl FilesystemObjectStore {
    /// Creates a store rooted at `root`; objects live under `<root>/<bucket>`.
    pub fn new<P: AsRef<Path>>(root: P, bucket: impl Into<String>) -> Self {
        Self { root: root.as_ref().to_path_buf(), bucket: bucket.into() }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Resolves a remote path inside the bucket directory.
    ///
    /// Returns `None` for absolute paths or paths that would escape the
    /// bucket (path traversal).
    fn resolve_remote_safe(&self, remote_path: &str) -> Option<PathBuf> {
        let remote = Path::new(remote_path);
        if remote.is_absolute() {
            return None;
        }
        for component in remote.components() {
            if matches!(component, Component::ParentDir) {
                return None;
            }
        }
        Some(self.root.join(&self.bucket).join(remote))
    }

    fn object_path(&self, handle: &ObjectHandle) -> Result<PathBuf, StorageError> {
        self.resolve_remote_safe(&handle.remote_path)
            .ok_or_else(|| StorageError::NotFound(handle.remote_path.clone()))
    }

    /// Whether an uploaded object has a public marker.
    pub fn is_public(&self, remote_path: &str) -> bool {
        self.resolve_remote_safe(remote_path)
            .map(|p| marker_path(&p).is_file())
            .unwrap_or(false)
    }
}

impl ObjectStore for FilesystemObjectStore {
    fn upload(&self, local: &Path, remote_path: &str) -> Result<ObjectHandle, StorageError> {
        let target = self.resolve_remote_safe(remote_path).ok_or_else(|| {
            StorageError::UploadFailed {
                path: remote_path.to_string(),
                message: "path escapes the bucket (traversal blocked)".to_string(),
            }
        })?;

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::UploadFailed {
                path: remote_path.to_string(),
                message: e.to_string(),
            })?;
        }
        std::fs::copy(local, &target).map_err(|e| StorageError::UploadFailed {
            path: local.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("uploaded {} to {}", local.display(), target.display());

        Ok(ObjectHandle { bucket: self.bucket.clone(), remote_path: remote_path.to_string() })
    }

    fn set_public(&self, handle: &ObjectHandle) -> Result<(), StorageError> {
        let target = self.object_path(handle)?;
        if !target.is_file() {
            return Err(StorageError::NotFound(handle.remote_path.clone()));
        }
        let marker = marker_path(&target);
        std::fs::write(&marker, b"").map_err(|_| StorageError::AclFailed(handle.remote_path.clone()))
    }

    fn public_url(&self, handle: &ObjectHandle) -> String {
        format!(
            "file://{}",
            self.root.join(&handle.bucket).join(&handle.remote_path).display()
        )
    }

    fn name(&self) -> &'static str {
        "FilesystemObjectStore"
    }
}

fn marker_path(object: &Path) -> PathBuf {
    let mut name = object.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(PUBLIC_MARKER_SUFFIX);
    object.with_file_name(name)
}
