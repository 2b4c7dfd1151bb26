use crate::core::error::{SearchError, SearchResult};
use crate::core::match_result::SearchRange;

/// Number of workers actually used for `limit` offsets.
///
/// More workers than offsets would leave some with empty ranges, so the count
/// is capped at `limit` (and never drops below 1).
pub fn effective_workers(limit: usize, workers: usize) -> usize {
    workers.min(limit).max(1)
}

/// Partition the offsets `[0, limit)` into contiguous ranges, one per worker.
///
/// Every range has `limit / workers` offsets except the last, which also takes
/// the remainder. Ranges are returned in offset order, and their union is
/// `[0, limit)` with no gaps and no overlaps.
///
/// `workers` is capped at `limit`. Returns an empty vector when `limit == 0`.
///
/// # Errors
/// `InvalidConfiguration` when `workers == 0`.
pub fn partition_offsets(limit: usize, workers: usize) -> SearchResult<Vec<SearchRange>> {
    if workers == 0 {
        return Err(SearchError::InvalidConfiguration { workers });
    }
    if limit == 0 {
        return Ok(Vec::new());
    }

    let n_chunks = effective_workers(limit, workers);
    let chunk = limit / n_chunks;

    let mut ranges = Vec::with_capacity(n_chunks);
    for c in 0..n_chunks {
        let start = c * chunk;
        let end = if c + 1 == n_chunks { limit } else { start + chunk };
        ranges.push(SearchRange::new(start, end));
    }

    Ok(ranges)
}
