use std::sync::{Arc, Mutex};

use rand::{SeedableRng, rngs::StdRng, seq::index::sample};

use crate::domain::restaurant::ports::RandomSource;

/// Draws from the thread-local rng. Non-deterministic across calls.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize> {
        sample(&mut rand::thread_rng(), population, amount.min(population)).into_vec()
    }
}

/// Deterministic source for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sample(&mut *rng, population, amount.min(population)).into_vec()
    }
}

/// The source picked from configuration: seeded when a seed is set.
#[derive(Debug, Clone)]
pub enum ConfiguredRandomSource {
    Thread(ThreadRandomSource),
    Seeded(SeededRandomSource),
}

impl ConfiguredRandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredRandomSource::Seeded(SeededRandomSource::new(seed)),
            None => ConfiguredRandomSource::Thread(ThreadRandomSource),
        }
    }
}

impl RandomSource for ConfiguredRandomSource {
    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize> {
        match self {
            ConfiguredRandomSource::Thread(source) => source.sample_indices(population, amount),
            ConfiguredRandomSource::Seeded(source) => source.sample_indices(population, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_thread_source_draws_distinct_indices_in_range() {
        let indices = ThreadRandomSource.sample_indices(10, 3);
        assert_eq!(indices.len(), 3);
        assert!(indices.iter().all(|i| *i < 10));
        assert_eq!(indices.iter().collect::<HashSet<_>>().len(), 3);
    }

    #[test]
    fn test_amount_is_capped_by_population() {
        assert_eq!(SeededRandomSource::new(1).sample_indices(2, 3).len(), 2);
        assert!(ThreadRandomSource.sample_indices(0, 3).is_empty());
    }

    #[test]
    fn test_configured_source_follows_seed() {
        let a = ConfiguredRandomSource::from_seed(Some(42)).sample_indices(100, 3);
        let b = ConfiguredRandomSource::from_seed(Some(42)).sample_indices(100, 3);
        assert_eq!(a, b);
        assert!(matches!(
            ConfiguredRandomSource::from_seed(None),
            ConfiguredRandomSource::Thread(_)
        ));
    }
}
