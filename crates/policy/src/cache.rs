//! Process-lifetime cache of compiled policies

use crate::descriptor::PolicyDescriptor;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Concurrent operation-name → policy map with first-write-wins inserts
///
/// Entries are never replaced or evicted. Compilation runs without any shard
/// lock held, so two threads may compile the same operation at once; the
/// first descriptor registered is the one every caller observes.
#[derive(Debug, Default)]
pub struct PolicyCache {
    entries: DashMap<String, Arc<PolicyDescriptor>>,
}

impl PolicyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached policy for `operation`, if compiled already
    #[must_use]
    pub fn get(&self, operation: &str) -> Option<Arc<PolicyDescriptor>> {
        self.entries
            .get(operation)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Cached policy for `operation`, compiling it with `compile` on a miss
    pub fn get_or_compile<F>(&self, operation: &str, compile: F) -> Arc<PolicyDescriptor>
    where
        F: FnOnce() -> PolicyDescriptor,
    {
        if let Some(found) = self.get(operation) {
            return found;
        }
        self.register(operation, compile())
    }

    /// Register `descriptor` unless another one got there first; returns the
    /// descriptor that is now cached
    pub fn register(&self, operation: &str, descriptor: PolicyDescriptor) -> Arc<PolicyDescriptor> {
        match self.entries.entry(operation.to_string()) {
            Entry::Occupied(existing) => {
                debug!(operation = %operation, "Discarding duplicate policy compilation");
                Arc::clone(existing.get())
            }
            Entry::Vacant(slot) => {
                let descriptor = Arc::new(descriptor);
                slot.insert(Arc::clone(&descriptor));
                descriptor
            }
        }
    }

    #[must_use]
    pub fn contains(&self, operation: &str) -> bool {
        self.entries.contains_key(operation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all cached operations, in no particular order
    #[must_use]
    pub fn operations(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }
}
