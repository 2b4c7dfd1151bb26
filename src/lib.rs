pub mod algorithms;
pub mod core;
pub mod metrics;

pub use crate::algorithms::cancel::ExactMatchSignal;
pub use crate::algorithms::parallel::{reduce_partials, search_parallel, search_parallel_with};
pub use crate::algorithms::partition::partition_offsets;
pub use crate::algorithms::sequential::{
    scan_range, search_sequential, search_sequential_with,
};
pub use crate::core::distance_metric::WindowMetric;
pub use crate::core::error::{SearchError, SearchResult};
pub use crate::core::match_result::{ExecutionStrategy, MatchResult, SearchConfig, SearchRange};
pub use crate::core::window::Window;
pub use crate::metrics::sad::{sad_distance, SumAbsoluteDifference};

/// High-level facade for nearest-subsequence search, generic over the distance metric.
///
/// The configured [`ExecutionStrategy`] picks between the sequential scan and
/// the partitioned parallel scan. Both return the same best-match contract.
///
/// # Examples
///
/// ```
/// use sadscan_rs::{SadEngine, SearchConfig};
///
/// let mut series: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.05).cos()).collect();
/// let pattern = vec![0.25, 0.5, 0.75, 1.0];
/// series[600..604].copy_from_slice(&pattern);
///
/// let engine = SadEngine::new(SearchConfig::partitioned(4));
/// let best = engine.search(&series, &pattern).unwrap();
/// assert_eq!(best.offset, Some(600));
/// assert_eq!(best.distance, 0.0);
/// ```
pub struct Engine<M: WindowMetric> {
    config: SearchConfig,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
    _metric: std::marker::PhantomData<M>,
}

impl<M: WindowMetric> Engine<M> {
    /// Create a new engine with the given configuration.
    ///
    /// Partitioned searches run on the ambient rayon pool.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "parallel")]
            pool: None,
            _metric: std::marker::PhantomData,
        }
    }

    /// Create an engine that owns a thread pool with one thread per configured worker.
    ///
    /// # Errors
    /// `InvalidConfiguration` for zero workers, `ThreadPool` if the pool fails to start.
    #[cfg(feature = "parallel")]
    pub fn with_thread_pool(config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers())
            .thread_name(|i| format!("sadscan-worker-{i}"))
            .build()
            .map_err(|e| SearchError::ThreadPool(e.to_string()))?;
        tracing::debug!(threads = pool.current_num_threads(), "built dedicated search pool");
        Ok(Self {
            config,
            pool: Some(pool),
            _metric: std::marker::PhantomData,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the best-matching window using the configured strategy.
    pub fn search(&self, series: &[f32], pattern: &[f32]) -> SearchResult<MatchResult> {
        self.config.validate()?;
        match self.config.strategy {
            ExecutionStrategy::Sequential => self.search_sequential(series, pattern),
            ExecutionStrategy::Partitioned { workers } => {
                self.search_parallel(series, pattern, workers)
            }
        }
    }

    /// Sequential scan over every offset, regardless of the configured strategy.
    pub fn search_sequential(&self, series: &[f32], pattern: &[f32]) -> SearchResult<MatchResult> {
        search_sequential_with::<M>(series, pattern)
    }

    /// Partitioned scan with `workers` workers, regardless of the configured strategy.
    ///
    /// Honors `cancel_on_exact` and runs inside the engine's own pool if it has one.
    pub fn search_parallel(
        &self,
        series: &[f32],
        pattern: &[f32],
        workers: usize,
    ) -> SearchResult<MatchResult> {
        let cancel = self.config.cancel_on_exact;
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            return pool.install(|| search_parallel_with::<M>(series, pattern, workers, cancel));
        }
        search_parallel_with::<M>(series, pattern, workers, cancel)
    }

    /// Distance at a single offset, or `None` if the window does not fit.
    pub fn distance_at(&self, series: &[f32], pattern: &[f32], offset: usize) -> Option<f32> {
        let window = Window::at(series, offset, pattern.len()).filter(|w| !w.is_empty())?;
        Some(M::distance(series, pattern, window.offset))
    }
}

impl<M: WindowMetric> std::fmt::Debug for Engine<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Convenience type alias for the Sum of Absolute Differences engine.
pub type SadEngine = Engine<SumAbsoluteDifference>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_strategies_agree() {
        let mut series: Vec<f32> = (0..400).map(|i| (i as f32 * 0.21).sin()).collect();
        let pattern = vec![0.5, -0.5, 0.5, -0.5, 0.5];
        series[250..255].copy_from_slice(&pattern);

        let seq = SadEngine::new(SearchConfig::sequential())
            .search(&series, &pattern)
            .unwrap();
        let par = SadEngine::new(SearchConfig::partitioned(3))
            .search(&series, &pattern)
            .unwrap();
        assert_eq!(seq, MatchResult::found(250, 0.0));
        assert_eq!(par, seq);
    }

    #[test]
    fn test_engine_rejects_zero_workers() {
        let engine = SadEngine::new(SearchConfig::partitioned(0));
        assert_eq!(
            engine.search(&[1.0, 2.0], &[1.0]),
            Err(SearchError::InvalidConfiguration { workers: 0 })
        );
    }

    #[test]
    fn test_engine_distance_at() {
        let engine = SadEngine::new(SearchConfig::sequential());
        let series = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(engine.distance_at(&series, &[2.0, 2.0], 2), Some(3.0));
        assert_eq!(engine.distance_at(&series, &[2.0, 2.0], 3), None);
        assert_eq!(engine.distance_at(&series, &[], 0), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_engine_with_thread_pool() {
        let config = SearchConfig::partitioned(2).with_cancel_on_exact(true);
        let engine = SadEngine::with_thread_pool(config).unwrap();
        let series: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let best = engine.search(&series, &[40.0, 41.0, 42.0]).unwrap();
        assert_eq!(best, MatchResult::found(40, 0.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_engine_with_thread_pool_zero_workers() {
        let err = SadEngine::with_thread_pool(SearchConfig::partitioned(0)).unwrap_err();
        assert_eq!(err, SearchError::InvalidConfiguration { workers: 0 });
    }
}
