//! Blob store seam: the key/value object storage the record store persists
//! into. The core never touches the filesystem directly; it goes through
//! [`BlobStore`] so the backend can be swapped without touching the logic.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type BlobResult<T> = Result<T, BlobError>;

/// Minimal object-storage contract: whole-object reads and whole-object
/// overwrites, nothing else. No append mode, no conditional writes; a `put`
/// unconditionally replaces any prior content (last writer wins).
pub trait BlobStore {
    fn get(&self, key: &str) -> BlobResult<Vec<u8>>;
    fn put(&self, key: &str, bytes: &[u8]) -> BlobResult<()>;
}

/// Filesystem-backed blob store: the bucket is a directory, keys are file
/// names inside it.
pub struct FsBlobStore {
    bucket: PathBuf,
}

impl FsBlobStore {
    pub fn new(bucket: impl Into<PathBuf>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.bucket.join(key)
    }
}

impl BlobStore for FsBlobStore {
    fn get(&self, key: &str) -> BlobResult<Vec<u8>> {
        match fs::read(self.object_path(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(BlobError::NotFound(key.to_string()))
            }
            Err(e) => Err(BlobError::Io(e)),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> BlobResult<()> {
        fs::create_dir_all(&self.bucket)?;
        fs::write(self.object_path(key), bytes)?;
        Ok(())
    }
}
