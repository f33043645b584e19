//! Persistent storage seam.
//!
//! The editor keeps one opaque string blob under a fixed key. Reads and
//! writes are treated as always succeeding, mirroring `localStorage`.

use std::collections::HashMap;

/// A key-value store of string blobs.
pub trait BlobStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store, for tests and headless hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.blobs.insert(key.to_string(), value);
    }
}
