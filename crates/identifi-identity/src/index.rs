use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use identifi_core::{IdentityRecord, UniqueTypeClassifier, UniqueTypes};

use crate::error::IdentityError;
use crate::identity::Identity;

/// Source of identities for the search widget.
#[async_trait]
pub trait IdentityIndex: Send + Sync {
    /// Identities matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Identity>, IdentityError>;
}

/// In-memory index keyed by each identity's canonical `type:value`.
///
/// Identities without a link target get a positional `anonymous:<n>` key.
pub struct MemoryIndex {
    identities: DashMap<String, Identity>,
    classifier: Arc<dyn UniqueTypeClassifier>,
    anonymous: AtomicUsize,
}

impl MemoryIndex {
    /// Create an empty index with the default unique-type list.
    pub fn new() -> Self {
        Self::with_classifier(Arc::new(UniqueTypes::default()))
    }

    pub fn with_classifier(classifier: Arc<dyn UniqueTypeClassifier>) -> Self {
        Self {
            identities: DashMap::new(),
            classifier,
            anonymous: AtomicUsize::new(0),
        }
    }

    /// Add an already normalized identity. Returns its key; an identity
    /// with the same canonical id is replaced.
    pub fn insert(&self, identity: Identity) -> String {
        let key = identity.canonical_id().unwrap_or_else(|| {
            let n = self.anonymous.fetch_add(1, Ordering::Relaxed);
            format!("anonymous:{}", n)
        });
        if self.identities.insert(key.clone(), identity).is_some() {
            tracing::debug!(%key, "replaced identity in index");
        }
        key
    }

    /// Normalize a raw record with this index's classifier and add it.
    pub fn insert_record(&self, record: IdentityRecord) -> String {
        self.insert(Identity::with_classifier(record, self.classifier.as_ref()))
    }

    /// Load a JSON array of raw records. Returns how many were added.
    pub fn load_json(&self, text: &str) -> Result<usize, IdentityError> {
        let records: Vec<IdentityRecord> = serde_json::from_str(text)?;
        let count = records.len();
        for record in records {
            self.insert_record(record);
        }
        tracing::info!(count, "loaded identities into index");
        Ok(count)
    }

    pub fn get(&self, key: &str) -> Option<Identity> {
        self.identities.get(key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    fn matches(identity: &Identity, needle: &str) -> bool {
        needle.is_empty()
            || identity
                .attributes()
                .iter()
                .any(|a| a.val().to_lowercase().contains(needle))
    }
}

impl Default for MemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityIndex for MemoryIndex {
    /// Case-insensitive substring match against attribute values, ordered
    /// by key. An empty query returns everything.
    async fn search(&self, query: &str) -> Result<Vec<Identity>, IdentityError> {
        let needle = query.trim().to_lowercase();
        let mut hits: Vec<(String, Identity)> = self
            .identities
            .iter()
            .filter(|entry| Self::matches(entry.value(), &needle))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        hits.sort_by(|a, b| a.0.cmp(&b.0));
        tracing::debug!(query, hits = hits.len(), "searched memory index");
        Ok(hits.into_iter().map(|(_, identity)| identity).collect())
    }
}
