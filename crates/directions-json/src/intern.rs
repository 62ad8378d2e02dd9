//! Call-scoped string interning.
//!
//! Enum-like fields (maneuver types, lane indications, road classes, speed
//! units) repeat thousands of times in a large response. A [`StringPool`]
//! hands out one shared `Arc<str>` per distinct value for as long as the pool
//! lives. Pools are owned by a [`Decoder`](crate::Decoder), never global, so
//! their growth ends with the decode that created them.

use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct StringPool {
    strings: HashSet<Arc<str>>,
    capacity: Option<usize>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool that stops admitting new distinct strings once it holds
    /// `capacity` of them. Strings already pooled keep deduplicating.
    pub fn bounded(capacity: usize) -> Self {
        StringPool {
            strings: HashSet::new(),
            capacity: Some(capacity),
        }
    }

    /// Canonical handle for `raw`. Equal inputs interned through the same
    /// pool return handles that are `Arc::ptr_eq`.
    pub fn intern(&mut self, raw: &str) -> Arc<str> {
        if let Some(existing) = self.strings.get(raw) {
            return Arc::clone(existing);
        }
        let fresh: Arc<str> = Arc::from(raw);
        if self.is_full() {
            tracing::debug!(len = self.strings.len(), "string pool saturated; not pooling value");
            return fresh;
        }
        self.strings.insert(Arc::clone(&fresh));
        fresh
    }

    /// `None` passes through without touching the pool.
    pub fn intern_opt(&mut self, raw: Option<&str>) -> Option<Arc<str>> {
        raw.map(|s| self.intern(s))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.strings.clear();
    }

    fn is_full(&self) -> bool {
        self.capacity
            .map(|cap| self.strings.len() >= cap)
            .unwrap_or(false)
    }
}
