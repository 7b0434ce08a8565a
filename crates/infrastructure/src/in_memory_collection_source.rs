use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tintcalc_application::{CollectionSource, UpstreamCredentials};
use tintcalc_core::{AppError, AppResult};

/// Collection source serving fixed payloads from memory.
#[derive(Debug, Default)]
pub struct InMemoryCollectionSource {
    collections: HashMap<(String, String), Value>,
    request_count: AtomicUsize,
}

impl InMemoryCollectionSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the payload returned for `(site_name, collection_name)`.
    #[must_use]
    pub fn with_collection(
        mut self,
        site_name: impl Into<String>,
        collection_name: impl Into<String>,
        payload: Value,
    ) -> Self {
        self.collections
            .insert((site_name.into(), collection_name.into()), payload);
        self
    }

    /// Returns how many retrievals were attempted.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionSource for InMemoryCollectionSource {
    async fn get_collection(
        &self,
        _credentials: &UpstreamCredentials,
        site_name: &str,
        collection_name: &str,
    ) -> AppResult<Value> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        self.collections
            .get(&(site_name.to_owned(), collection_name.to_owned()))
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "collection '{collection_name}' does not exist on site '{site_name}'"
                ))
            })
    }
}
