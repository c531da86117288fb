//! StepCache: LRU memoization wrapping the Collatz step counter

use crate::error::Result;
use crate::lru::MemoCache;
use crate::sequence;
use crate::stats::CacheStats;

/// Serve `steps(n)` from `cache`, computing and storing it on a miss
///
/// Every lookup is recorded in `stats`. A failed computation leaves the
/// cache untouched.
pub fn compute_with_cache(cache: &mut MemoCache, n: u64, stats: &mut CacheStats) -> Result<u64> {
    if let Some(steps) = cache.get(n) {
        stats.record_hit();
        return Ok(steps);
    }

    stats.record_miss();
    let steps = sequence::steps(n)?;
    cache.put(n, steps);

    Ok(steps)
}

/// Memoized step counter owning its cache and statistics
pub struct StepCache {
    /// LRU cache of step counts
    cache: MemoCache,

    /// Cache statistics
    stats: CacheStats,
}

impl StepCache {
    /// Create a new StepCache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of memoized inputs
    ///
    /// # Returns
    /// * `Result<StepCache>` - Fails if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            cache: MemoCache::new(capacity)?,
            stats: CacheStats::new(),
        })
    }

    /// Step count for `n`, from cache when possible
    pub fn steps(&mut self, n: u64) -> Result<u64> {
        compute_with_cache(&mut self.cache, n, &mut self.stats)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Read-only view of the underlying cache
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if nothing is memoized yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Clear the cache and reset statistics
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }
}
