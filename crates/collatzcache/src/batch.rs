//! Batch driver: random inputs in, step counts and hit rate out

use std::time::{Duration, Instant};

use rand::Rng;

use crate::cache::StepCache;
use crate::error::{Error, Result};

/// Cache capacity used when the caller does not pick one
pub const DEFAULT_CAPACITY: usize = 100;

/// Parameters of one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of inputs to generate
    pub count: usize,
    /// Smallest input (inclusive)
    pub min: u64,
    /// Largest input (inclusive)
    pub max: u64,
    /// Memoization cache capacity
    pub capacity: usize,
}

impl BatchConfig {
    /// Config with the default cache capacity
    pub fn new(count: usize, min: u64, max: u64) -> Self {
        Self {
            count,
            min,
            max,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Override the cache capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject empty batches, non-positive bounds and inverted ranges
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidConfiguration(
                "count must be greater than 0".to_string(),
            ));
        }
        if self.min == 0 || self.max == 0 {
            return Err(Error::InvalidConfiguration(
                "min and max must be positive".to_string(),
            ));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfiguration(format!(
                "min ({}) must not exceed max ({})",
                self.min, self.max
            )));
        }
        if self.capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "cache capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of [`run_batch`]
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Step count per input, in input order
    pub steps: Vec<u64>,
    /// Inputs served from the cache
    pub hits: u64,
    /// Wall-clock time spent in the compute loop
    pub elapsed: Duration,
}

impl BatchReport {
    /// Cache hits as a percentage of all inputs
    pub fn hit_percentage(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.hits as f64 / self.steps.len() as f64 * 100.0
        }
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Draw `count` values uniformly from `min..=max`
///
/// # Errors
/// * `Error::InvalidConfiguration` - `min` is 0 or greater than `max`
/// * `Error::ResourceExhaustion` - the output buffer could not be allocated
pub fn generate_inputs<R: Rng + ?Sized>(
    count: usize,
    min: u64,
    max: u64,
    rng: &mut R,
) -> Result<Vec<u64>> {
    if min == 0 || min > max {
        return Err(Error::InvalidConfiguration(format!(
            "invalid input range {}..={}",
            min, max
        )));
    }

    let mut inputs = alloc_buffer(count)?;
    inputs.extend((0..count).map(|_| rng.random_range(min..=max)));
    Ok(inputs)
}

/// Run every input through `cache`, in order
///
/// Hits are counted from the cache's own statistics, so a fresh
/// `StepCache` gives the hit count of this batch alone.
pub fn run_batch(inputs: &[u64], cache: &mut StepCache) -> Result<BatchReport> {
    let mut steps = alloc_buffer(inputs.len())?;
    let hits_before = cache.stats().hits();

    let start = Instant::now();
    for &n in inputs {
        steps.push(cache.steps(n)?);
    }
    let elapsed = start.elapsed();

    Ok(BatchReport {
        steps,
        hits: cache.stats().hits() - hits_before,
        elapsed,
    })
}

fn alloc_buffer(count: usize) -> Result<Vec<u64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(count)
        .map_err(|_| Error::ResourceExhaustion(count))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_validate_ok() {
        let config = BatchConfig::new(10, 1, 100);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
        assert!(BatchConfig::new(1, 5, 5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            BatchConfig::new(0, 1, 10),
            BatchConfig::new(10, 0, 10),
            BatchConfig::new(10, 1, 0),
            BatchConfig::new(10, 11, 10),
            BatchConfig::new(10, 1, 10).with_capacity(0),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfiguration(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_generate_inputs_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let inputs = generate_inputs(1000, 10, 20, &mut rng).unwrap();

        assert_eq!(inputs.len(), 1000);
        assert!(inputs.iter().all(|&n| (10..=20).contains(&n)));
        // Both bounds are reachable
        assert!(inputs.contains(&10));
        assert!(inputs.contains(&20));
    }

    #[test]
    fn test_generate_inputs_deterministic() {
        let a = generate_inputs(50, 1, 1_000_000, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_inputs(50, 1, 1_000_000, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_inputs_single_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let inputs = generate_inputs(5, 9, 9, &mut rng).unwrap();
        assert_eq!(inputs, vec![9; 5]);
    }

    #[test]
    fn test_generate_inputs_bad_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_inputs(5, 0, 9, &mut rng).is_err());
        assert!(generate_inputs(5, 10, 9, &mut rng).is_err());
    }

    #[test]
    fn test_generate_inputs_allocation_failure() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_inputs(usize::MAX, 1, 9, &mut rng);
        assert!(matches!(result, Err(Error::ResourceExhaustion(n)) if n == usize::MAX));
    }

    #[test]
    fn test_run_batch() {
        let mut cache = StepCache::new(DEFAULT_CAPACITY).unwrap();
        let inputs = [6, 7, 6, 1, 7, 6];

        let report = run_batch(&inputs, &mut cache).unwrap();

        assert_eq!(report.steps, vec![8, 16, 8, 0, 16, 8]);
        assert_eq!(report.hits, 3);
        assert_eq!(report.hit_percentage(), 50.0);
        assert!(report.elapsed_secs() >= 0.0);
    }

    #[test]
    fn test_run_batch_small_cache() {
        let mut cache = StepCache::new(1).unwrap();
        let inputs = [3, 5, 3, 3];

        let report = run_batch(&inputs, &mut cache).unwrap();

        // 3 is evicted by 5, then hit once on the final repeat
        assert_eq!(report.hits, 1);
        assert_eq!(report.steps, vec![7, 5, 7, 7]);
    }

    #[test]
    fn test_run_batch_empty() {
        let mut cache = StepCache::new(4).unwrap();
        let report = run_batch(&[], &mut cache).unwrap();
        assert!(report.steps.is_empty());
        assert_eq!(report.hit_percentage(), 0.0);
    }

    #[test]
    fn test_run_batch_invalid_input() {
        let mut cache = StepCache::new(4).unwrap();
        let result = run_batch(&[5, 0], &mut cache);
        assert!(matches!(result, Err(Error::InvalidInput(0))));
    }
}
