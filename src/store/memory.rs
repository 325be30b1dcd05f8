//! In-memory layout source.
//!
//! The reference implementation of `LayoutSource`, for tests and for
//! embedding the core without a persistence layer: the upload pipeline
//! (or a test) registers documents, the store fetches them by name.

use hashbrown::HashMap;
use parking_lot::RwLock;

use super::{LayoutDocuments, LayoutSource};
use crate::Result;
use crate::model::canonical_name;

#[derive(Default)]
pub struct MemorySource {
    layouts: RwLock<HashMap<String, LayoutDocuments>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register layout documents under a building name.
    pub fn insert(&self, building: &str, documents: LayoutDocuments) {
        self.layouts
            .write()
            .insert(canonical_name(building), documents);
    }

    pub fn remove(&self, building: &str) -> Option<LayoutDocuments> {
        self.layouts.write().remove(&canonical_name(building))
    }
}

impl LayoutSource for MemorySource {
    fn fetch(&self, building: &str) -> Result<Option<LayoutDocuments>> {
        Ok(self
            .layouts
            .read()
            .get(&canonical_name(building))
            .cloned())
    }
}
