use crate::algorithms::cancel::{ExactMatchSignal, CANCEL_CHECK_INTERVAL};
use crate::core::distance_metric::WindowMetric;
use crate::core::error::{SearchError, SearchResult};
use crate::core::match_result::{MatchResult, SearchRange};
use crate::core::window::offset_limit;
use crate::metrics::sad::SumAbsoluteDifference;

/// Validate the inputs of a search and return the number of valid offsets.
///
/// All precondition checks live here so the per-offset loop never fails.
/// A pattern longer than the series gives `Ok(0)`.
pub(crate) fn checked_limit(series: &[f32], pattern: &[f32]) -> SearchResult<usize> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    Ok(offset_limit(series.len(), pattern.len()))
}

/// Scan the offsets of `range` and return the best window among them.
///
/// This is the worker body of both strategies: strict less-than updates, so the
/// first offset at the minimum wins, and an immediate stop on a `0.0` distance.
/// It only borrows `series` and `pattern`.
///
/// `range` must lie within `[0, series.len() - pattern.len() + 1)`.
pub fn scan_range<M: WindowMetric>(
    series: &[f32],
    pattern: &[f32],
    range: SearchRange,
) -> MatchResult {
    let mut best = MatchResult::none();
    for offset in range.offsets() {
        let d = M::distance(series, pattern, offset);
        if best.update(offset, d) && d == 0.0 {
            break;
        }
    }
    best
}

/// [`scan_range`] for worker `worker`, cooperating through `signal`.
///
/// Reports an exact match to `signal`, and gives up once a lower-indexed
/// worker has reported one. The signal is polled every
/// [`CANCEL_CHECK_INTERVAL`] offsets.
pub fn scan_range_cancellable<M: WindowMetric>(
    series: &[f32],
    pattern: &[f32],
    range: SearchRange,
    worker: usize,
    signal: &ExactMatchSignal,
) -> MatchResult {
    let mut best = MatchResult::none();
    let mut start = range.start;

    while start < range.end {
        if signal.should_stop(worker) {
            tracing::trace!(worker, stopped_at = start, "worker cancelled by exact match");
            break;
        }
        let end = (start + CANCEL_CHECK_INTERVAL).min(range.end);
        for offset in start..end {
            let d = M::distance(series, pattern, offset);
            if best.update(offset, d) && d == 0.0 {
                signal.report(worker);
                return best;
            }
        }
        start = end;
    }

    best
}

/// Sequential nearest-subsequence search over every offset, generic over the metric.
///
/// Returns `MatchResult::none()` when the pattern is longer than the series.
///
/// # Errors
/// `EmptyPattern` when `pattern` has no samples.
pub fn search_sequential_with<M: WindowMetric>(
    series: &[f32],
    pattern: &[f32],
) -> SearchResult<MatchResult> {
    let limit = checked_limit(series, pattern)?;
    if limit == 0 {
        return Ok(MatchResult::none());
    }
    let best = scan_range::<M>(series, pattern, SearchRange::new(0, limit));
    if best.is_exact() {
        tracing::trace!(offset = ?best.offset, "exact match, scan stopped early");
    }
    Ok(best)
}

/// Sequential SAD search: the first offset with the smallest SAD.
///
/// # Examples
///
/// ```
/// use sadscan_rs::search_sequential;
///
/// let series = vec![0.1, 0.9, 0.4, 0.2, 0.8, 0.4, 0.3];
/// let pattern = vec![0.2, 0.8, 0.4];
/// let best = search_sequential(&series, &pattern).unwrap();
/// assert_eq!(best.offset, Some(3));
/// assert_eq!(best.distance, 0.0);
/// ```
pub fn search_sequential(series: &[f32], pattern: &[f32]) -> SearchResult<MatchResult> {
    search_sequential_with::<SumAbsoluteDifference>(series, pattern)
}
