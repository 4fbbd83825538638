//! # Solid Cache
//!
//! Memoizes half-space solids by surface number and sense so a surface
//! named many times is only tessellated once per sense.
//!
//! A cache belongs to one surface catalog and one [`Universe`](crate::Universe);
//! keys do not record either.
//!
//! ## Features
//!
//! - **LRU eviction**: [`SolidCache`] drops the least recently used entry when full
//! - **Sharing**: [`SharedSolidCache`] is a cloneable handle for parallel builds
//! - **Statistics**: Hit and miss counts for tuning
//!
//! ## Example
//!
//! ```rust
//! use cellgeom_mesh::{SolidCache, SolidKey, SolidMemo, Solid};
//! use cellgeom_parser::Sense;
//! use std::sync::Arc;
//!
//! let mut cache = SolidCache::new();
//! let key = SolidKey::new(1, Sense::Negative);
//! assert!(cache.lookup(key).is_none());
//! cache.remember(key, Arc::new(Solid::empty()));
//! assert!(cache.lookup(key).is_some());
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::solid::Solid;
use cellgeom_parser::Sense;
use config::constants::DEFAULT_CACHE_CAPACITY;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Cache key: one side of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolidKey {
    /// Surface number
    pub surface: u32,
    /// Side of the surface
    pub sense: Sense,
}

impl SolidKey {
    /// Key for `surface` on side `sense`.
    pub fn new(surface: u32, sense: Sense) -> Self {
        Self { surface, sense }
    }
}

/// Storage for memoized half-space solids.
pub trait SolidMemo {
    /// Cached solid for `key`, if any.
    fn lookup(&mut self, key: SolidKey) -> Option<Arc<Solid>>;

    /// Stores a freshly built solid.
    fn remember(&mut self, key: SolidKey, solid: Arc<Solid>);
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
}

impl CacheStats {
    /// Hit rate as a fraction, or 0.0 if there were no lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// =============================================================================
// SINGLE-OWNER CACHE
// =============================================================================

#[derive(Debug)]
struct CacheEntry {
    solid: Arc<Solid>,
    /// Access tick for LRU
    last_access: u64,
}

/// Solid cache with LRU eviction, owned by one builder at a time.
#[derive(Debug)]
pub struct SolidCache {
    entries: HashMap<SolidKey, CacheEntry>,
    max_entries: usize,
    ticks: u64,
    stats: CacheStats,
}

impl SolidCache {
    /// Cache holding up to [`DEFAULT_CACHE_CAPACITY`] solids.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache holding up to `max_entries` solids (at least one).
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            ticks: 0,
            stats: CacheStats::default(),
        }
    }

    /// Number of cached solids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `key` is cached. Does not count as an access.
    pub fn contains(&self, key: SolidKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Hit, miss and eviction counts so far.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops every entry and resets the statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            trace!(surface = key.surface, sense = ?key.sense, "evicting cached solid");
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }
}

impl Default for SolidCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidMemo for SolidCache {
    fn lookup(&mut self, key: SolidKey) -> Option<Arc<Solid>> {
        self.ticks += 1;
        match self.entries.get_mut(&key) {
            Some(entry) => {
                entry.last_access = self.ticks;
                self.stats.hits += 1;
                trace!(surface = key.surface, sense = ?key.sense, "solid cache hit");
                Some(Arc::clone(&entry.solid))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    fn remember(&mut self, key: SolidKey, solid: Arc<Solid>) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_lru();
        }
        self.ticks += 1;
        self.entries.insert(
            key,
            CacheEntry {
                solid,
                last_access: self.ticks,
            },
        );
    }
}

// =============================================================================
// SHARED CACHE
// =============================================================================

#[derive(Debug, Default)]
struct SharedState {
    solids: RwLock<HashMap<SolidKey, Arc<Solid>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Cache shared between threads. Clones are handles to the same storage.
///
/// Lookups take a read lock; only inserts take the write lock. Entries are
/// never evicted. When two builders race on the same key the first solid
/// stored wins.
#[derive(Debug, Clone, Default)]
pub struct SharedSolidCache {
    state: Arc<SharedState>,
}

impl SharedSolidCache {
    /// Empty shared cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached solids.
    pub fn len(&self) -> usize {
        self.state.solids.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hit and miss counts across all handles.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.state.hits.load(Ordering::Relaxed),
            misses: self.state.misses.load(Ordering::Relaxed),
            evictions: 0,
        }
    }
}

impl SolidMemo for SharedSolidCache {
    fn lookup(&mut self, key: SolidKey) -> Option<Arc<Solid>> {
        let found = self
            .state
            .solids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        let counter = if found.is_some() { &self.state.hits } else { &self.state.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    fn remember(&mut self, key: SolidKey, solid: Arc<Solid>) {
        self.state
            .solids
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(solid);
    }
}

// =============================================================================
// TESTS
// =============================================================================
