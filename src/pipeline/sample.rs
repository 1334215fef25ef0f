//! Randomized related-set sampling.
//!
//! Related panels show a small shuffled subset of a candidate pool. The
//! shuffle is for visual variety only; no determinism, fairness, or
//! reproducibility is promised. Re-sampling is tied to pool identity
//! changes, not to every render, so the panel does not thrash.

use rand::seq::SliceRandom;

use crate::models::Project;

/// Default number of projects drawn for a panel.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Shuffle the pool and take a prefix of up to `DEFAULT_SAMPLE_SIZE`.
pub fn sample<'a>(pool: &[&'a Project]) -> Vec<&'a Project> {
    sample_n(pool, DEFAULT_SAMPLE_SIZE)
}

/// Shuffle the pool and take a prefix of up to `count` entries.
///
/// An empty pool yields an empty result; callers render nothing.
pub fn sample_n<'a>(pool: &[&'a Project], count: usize) -> Vec<&'a Project> {
    let mut shuffled: Vec<&Project> = pool.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled.truncate(count);
    shuffled
}

/// Sampler that re-draws only when its input pool changes identity.
///
/// Pool identity is the ordered id sequence. Refreshing with the same
/// sequence keeps the previous draw; a different sequence triggers a
/// fresh shuffle.
#[derive(Debug, Clone)]
pub struct RelatedSampler {
    count: usize,
    pool_ids: Vec<String>,
    current: Vec<Project>,
}

impl Default for RelatedSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedSampler {
    /// Create a sampler drawing the default panel size.
    pub fn new() -> Self {
        Self::with_count(DEFAULT_SAMPLE_SIZE)
    }

    /// Create a sampler drawing up to `count` projects.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            pool_ids: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Whether the given pool differs from the last observed one.
    pub fn pool_changed(&self, pool: &[&Project]) -> bool {
        self.pool_ids.len() != pool.len()
            || self
                .pool_ids
                .iter()
                .zip(pool.iter())
                .any(|(id, p)| *id != p.id)
    }

    /// Observe the pool, re-sampling only if its identity changed.
    pub fn refresh(&mut self, pool: &[&Project]) -> &[Project] {
        if self.pool_changed(pool) {
            self.pool_ids = pool.iter().map(|p| p.id.clone()).collect();
            self.current = sample_n(pool, self.count)
                .into_iter()
                .cloned()
                .collect();
        }
        &self.current
    }

    /// The current draw without observing a pool.
    pub fn current(&self) -> &[Project] {
        &self.current
    }
}
