//! # collatzcache
//!
//! Memoized Collatz step counting over a fixed-capacity LRU cache.
//!
//! ## Architecture
//! - **HashMap**: AHash for fast key lookups (O(1))
//! - **LRU List**: Slot arena with a doubly-linked recency list (O(1) promote/evict)
//! - **Orchestration**: `compute_with_cache` checks the cache, computes on miss
//!   and records hits in caller-owned `CacheStats`
//! - **Batch**: random input generation, batch runs and CSV reports
//!
//! ```
//! use collatzcache::{compute_with_cache, CacheStats, MemoCache};
//!
//! let mut cache = MemoCache::new(100)?;
//! let mut stats = CacheStats::new();
//!
//! assert_eq!(compute_with_cache(&mut cache, 6, &mut stats)?, 8);
//! assert_eq!(compute_with_cache(&mut cache, 6, &mut stats)?, 8);
//! assert_eq!(stats.hits(), 1);
//! # Ok::<(), collatzcache::Error>(())
//! ```

#![warn(missing_docs)]

pub mod batch;
mod cache;
mod error;
mod lru;
pub mod report;
mod sequence;
mod stats;

pub use batch::{BatchConfig, BatchReport};
pub use cache::{compute_with_cache, StepCache};
pub use error::{Error, Result};
pub use lru::{Keys, MemoCache};
pub use sequence::steps;
pub use stats::CacheStats;
