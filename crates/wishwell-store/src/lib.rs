pub mod document;
pub mod error;
pub mod ops;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;

use crate::document::Document;
use crate::error::StoreError;

/// The flat-file document store. Every operation is a full-document
/// read-modify-write under one global lock — the document is the
/// consistency boundary, and serializing writers is what keeps concurrent
/// mutations from clobbering each other.
pub struct Store {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Store {
    /// Open the store, creating an empty document if the file does not
    /// exist yet. An existing file must parse; after startup a missing or
    /// malformed file is fatal to the individual operation instead.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if path.exists() {
            read_document(path)?;
        } else {
            write_document(path, &Document::default())?;
            info!("Initialized empty document at {}", path.display());
        }

        info!("Store opened at {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        })
    }

    /// Run a closure over a fresh load of the document.
    pub fn read<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Document) -> T,
    {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let doc = read_document(&self.path)?;
        Ok(f(&doc))
    }

    /// Load the document, apply a mutation, and persist the result.
    /// Nothing is written when the closure fails.
    pub fn update<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Document) -> Result<T, StoreError>,
    {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut doc = read_document(&self.path)?;
        let out = f(&mut doc)?;
        write_document(&self.path, &doc)?;
        Ok(out)
    }
}

fn read_document(path: &Path) -> Result<Document, StoreError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn write_document(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(doc)?;
    fs::write(path, json)?;
    Ok(())
}
