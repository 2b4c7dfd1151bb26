/// Trait for window distance metrics used by the subsequence search.
///
/// Designed for static polymorphism: the search algorithms are generic over
/// `M: WindowMetric`, so the per-offset call is monomorphized and inlined into
/// the scan loop.
///
/// Implementations must be pure functions of their borrowed inputs. The same
/// `series` and `pattern` slices are read concurrently by every worker of a
/// partitioned search.
pub trait WindowMetric: Clone + Send + Sync {
    /// Distance between `pattern` and the window of `series` starting at `offset`.
    ///
    /// Callers guarantee `offset + pattern.len() <= series.len()` and a
    /// non-empty `pattern`. The result is non-negative and `0.0` only for an
    /// element-wise exact match.
    fn distance(series: &[f32], pattern: &[f32], offset: usize) -> f32;

    /// Compute the distance at every valid offset.
    ///
    /// Default implementation loops over `distance()`. Used by tests and
    /// diagnostics; the searches themselves never materialize the profile.
    fn distance_profile(series: &[f32], pattern: &[f32]) -> Vec<f32> {
        if pattern.is_empty() || pattern.len() > series.len() {
            return Vec::new();
        }
        let limit = series.len() - pattern.len() + 1;
        (0..limit)
            .map(|offset| Self::distance(series, pattern, offset))
            .collect()
    }
}
