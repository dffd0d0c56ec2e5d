use crate::algorithm::selection::TransformSpec;
use crate::io::configuration::CACHE_CAPACITY;
use crate::math::Point;
use std::collections::{BTreeMap, HashMap};

/// Key for memoized transform applications
///
/// Built from the exact bit patterns of the map parameters and the input
/// point, so a hit only ever replays a bit-identical computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TransformKey {
    map: [u64; 6],
    point: [u64; 2],
}

impl TransformKey {
    /// Create a key for applying `spec` to `point`
    pub const fn new(spec: &TransformSpec, point: Point) -> Self {
        Self {
            map: spec.map.to_bits(),
            point: point.to_bits(),
        }
    }
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Number of entries dropped to respect the capacity
    pub evictions: usize,
}

/// Bounded least-recently-used memoization of transform applications
///
/// Hits are rare for floating-point chains; they occur when a point is
/// revisited exactly, e.g. at a fixed point of the selected map.
#[derive(Debug)]
pub struct TransformCache {
    entries: HashMap<TransformKey, (Point, u64)>,
    /// Last-use tick to key, oldest first
    recency: BTreeMap<u64, TransformKey>,
    tick: u64,
    capacity: usize,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl Default for TransformCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformCache {
    /// Create an empty cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    /// Create an empty cache holding at most `capacity` entries
    ///
    /// A capacity of zero disables storage; every lookup is a miss.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(CACHE_CAPACITY)),
            recency: BTreeMap::new(),
            tick: 0,
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Apply `spec` to `point`, reusing a memoized result when available
    pub fn apply(&mut self, spec: &TransformSpec, point: Point) -> Point {
        let key = TransformKey::new(spec, point);
        self.tick += 1;
        let tick = self.tick;

        if let Some((result, last_used)) = self.entries.get_mut(&key) {
            self.stats.hits += 1;
            self.recency.remove(&*last_used);
            *last_used = tick;
            self.recency.insert(tick, key);
            return *result;
        }

        self.stats.misses += 1;
        let result = spec.map.apply(point);
        if self.capacity == 0 {
            return result;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(key, (result, tick));
        self.recency.insert(tick, key);
        result
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }

    /// Whether a result for `spec` applied to `point` is currently stored
    pub fn contains(&self, spec: &TransformSpec, point: Point) -> bool {
        self.entries.contains_key(&TransformKey::new(spec, point))
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored entries
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.tick = 0;
        self.stats = CacheStats::default();
    }
}
