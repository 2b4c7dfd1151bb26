use crate::algorithms::cancel::ExactMatchSignal;
use crate::algorithms::partition::partition_offsets;
use crate::algorithms::sequential::{checked_limit, scan_range, scan_range_cancellable};
use crate::core::distance_metric::WindowMetric;
use crate::core::error::SearchResult;
use crate::core::match_result::{MatchResult, SearchRange};
use crate::metrics::sad::SumAbsoluteDifference;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Partitioned nearest-subsequence search, generic over the metric.
///
/// The offsets `[0, limit)` are split into `workers` contiguous ranges (see
/// [`partition_offsets`]). Each range is scanned by [`scan_range`] on its own
/// rayon task, reading `series` and `pattern` through shared borrows. The
/// partial results are merged in worker order, so ties resolve to the lowest
/// offset exactly as in the sequential scan.
///
/// With `cancel_on_exact`, workers stop early once a lower-indexed worker has
/// found a `0.0` distance. The result is the same either way.
///
/// Without the `parallel` feature the ranges are scanned one after another.
///
/// # Errors
/// - `InvalidConfiguration` when `workers == 0`.
/// - `EmptyPattern` when `pattern` has no samples.
pub fn search_parallel_with<M: WindowMetric>(
    series: &[f32],
    pattern: &[f32],
    workers: usize,
    cancel_on_exact: bool,
) -> SearchResult<MatchResult> {
    let limit = checked_limit(series, pattern)?;
    let ranges = partition_offsets(limit, workers)?;
    if ranges.is_empty() {
        return Ok(MatchResult::none());
    }

    if ranges.len() < workers {
        tracing::debug!(
            requested = workers,
            effective = ranges.len(),
            limit,
            "worker count capped at number of offsets"
        );
    }
    tracing::debug!(
        limit,
        workers = ranges.len(),
        chunk = ranges[0].len(),
        cancel_on_exact,
        "partitioned search"
    );

    let partials = scan_partitions::<M>(series, pattern, &ranges, cancel_on_exact);
    Ok(reduce_partials(&partials))
}

/// Partitioned SAD search with `workers` workers.
///
/// # Examples
///
/// ```
/// use sadscan_rs::{search_parallel, search_sequential};
///
/// let series: Vec<f32> = (0..200).map(|i| (i as f32 * 0.3).sin()).collect();
/// let pattern = series[120..130].to_vec();
/// let par = search_parallel(&series, &pattern, 4).unwrap();
/// let seq = search_sequential(&series, &pattern).unwrap();
/// assert_eq!(par, seq);
/// ```
pub fn search_parallel(
    series: &[f32],
    pattern: &[f32],
    workers: usize,
) -> SearchResult<MatchResult> {
    search_parallel_with::<SumAbsoluteDifference>(series, pattern, workers, false)
}

/// Run one worker per range and collect the local results in range order.
fn scan_partitions<M: WindowMetric>(
    series: &[f32],
    pattern: &[f32],
    ranges: &[SearchRange],
    cancel_on_exact: bool,
) -> Vec<MatchResult> {
    let signal = ExactMatchSignal::new();

    let scan = |(worker, range): (usize, &SearchRange)| {
        let local = if cancel_on_exact {
            scan_range_cancellable::<M>(series, pattern, *range, worker, &signal)
        } else {
            scan_range::<M>(series, pattern, *range)
        };
        tracing::trace!(
            worker,
            start = range.start,
            end = range.end,
            offset = ?local.offset,
            distance = local.distance,
            "worker done"
        );
        local
    };

    #[cfg(feature = "parallel")]
    let partials = ranges.par_iter().enumerate().map(scan).collect();
    #[cfg(not(feature = "parallel"))]
    let partials = ranges.iter().enumerate().map(scan).collect();

    partials
}

/// Reduce per-worker results to the global best.
///
/// Minimum distance wins; among equal distances the lowest offset wins, which
/// is the lowest-indexed worker since ranges are ordered and contiguous.
pub fn reduce_partials(partials: &[MatchResult]) -> MatchResult {
    partials
        .iter()
        .fold(MatchResult::none(), |mut best, local| {
            best.merge(local);
            best
        })
}
