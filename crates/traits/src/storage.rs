//! ObjectStore trait for abstracting artifact persistence.
//!
//! The composer hands a finished artifact to an object store and gets back a
//! public URL; this trait keeps the engine independent of any particular
//! storage transport.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for object storage operations.
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Failed to upload '{path}': {message}")]
    UploadFailed { path: String, message: String },

    #[error("Failed to change access on '{0}'")]
    AclFailed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Identifies one stored object within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    pub bucket: String,
    pub remote_path: String,
}

/// A trait for persisting rendered artifacts to an object store.
///
/// Implementations may target a cloud bucket, a directory on disk, or memory.
/// All operations are synchronous and unretried; a failed upload aborts the
/// generation that requested it.
pub trait ObjectStore: Send + Sync + Debug {
    /// Upload a local file under `remote_path` and return its handle.
    fn upload(&self, local: &Path, remote_path: &str) -> Result<ObjectHandle, StorageError>;

    /// Make a stored object publicly readable.
    fn set_public(&self, handle: &ObjectHandle) -> Result<(), StorageError>;

    /// Public URL of a stored object.
    fn public_url(&self, handle: &ObjectHandle) -> String;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<T: ObjectStore> ObjectStore for std::sync::Arc<T> {
    fn upload(&self, local: &Path, remote_path: &str) -> Result<ObjectHandle, StorageError> {
        (**self).upload(local, remote_path)
    }

    fn set_public(&self, handle: &ObjectHandle) -> Result<(), StorageError> {
        (**self).set_public(handle)
    }

    fn public_url(&self, handle: &ObjectHandle) -> String {
        (**self).public_url(handle)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[derive(Debug, Default)]
struct StoredObject {
    data: Vec<u8>,
    public: bool,
}

/// An in-memory object store.
///
/// Uploads are held in memory under their remote path; URLs use the
/// `memory://` scheme. The standard persistence double for tests and demos.
#[derive(Debug)]
pub struct InMemoryObjectStore {
    bucket: String,
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl InMemoryObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self { bucket: bucket.into(), objects: RwLock::new(HashMap::new()) }
    }

    /// Bytes of an uploaded object, if present.
    pub fn object(&self, remote_path: &str) -> Option<Vec<u8>> {
        self.objects.read().ok()?.get(remote_path).map(|o| o.data.clone())
    }

    /// Whether an uploaded object has been made public.
    pub fn is_public(&self, remote_path: &str) -> bool {
        self.objects
            .read()
            .map(|objects| objects.get(remote_path).map(|o| o.public).unwrap_or(false))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.objects.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().map(|o| o.is_empty()).unwrap_or(true)
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn upload(&self, local: &Path, remote_path: &str) -> Result<ObjectHandle, StorageError> {
        let data = std::fs::read(local).map_err(|e| StorageError::UploadFailed {
            path: local.display().to_string(),
            message: e.to_string(),
        })?;
        let mut objects = self.objects.write().map_err(|_| StorageError::UploadFailed {
            path: remote_path.to_string(),
            message: "object store lock poisoned".to_string(),
        })?;
        objects.insert(remote_path.to_string(), StoredObject { data, public: false });
        Ok(ObjectHandle { bucket: self.bucket.clone(), remote_path: remote_path.to_string() })
    }

    fn set_public(&self, handle: &ObjectHandle) -> Result<(), StorageError> {
        let mut objects = self
            .objects
            .write()
            .map_err(|_| StorageError::AclFailed(handle.remote_path.clone()))?;
        match objects.get_mut(&handle.remote_path) {
            Some(object) => {
                object.public = true;
                Ok(())
            }
            None => Err(StorageError::NotFound(handle.remote_path.clone())),
        }
    }

    fn public_url(&self, handle: &ObjectHandle) -> String {
        format!("memory://{}/{}", handle.bucket, handle.remote_path)
    }

    fn name(&self) -> &'static str {
        "InMemoryObjectStore"
    }
}
