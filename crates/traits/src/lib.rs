pub mod storage;

pub use storage::{InMemoryObjectStore, ObjectHandle, ObjectStore, StorageError};
