use crate::core::distance_metric::WindowMetric;
use crate::core::window::Window;

/// Sum of Absolute Differences between `pattern` and `series[offset..offset + m]`.
///
/// Summation runs left to right in `f32`, so the same window always produces
/// the same bits. Every term is non-negative, so the sum is `0.0` exactly when
/// every sample pair is equal.
///
/// # Panics
/// Panics if the window runs past the end of `series`. Callers validate
/// offsets once at the search entry point, not per window.
#[inline]
pub fn sad_distance(series: &[f32], pattern: &[f32], offset: usize) -> f32 {
    debug_assert!(!pattern.is_empty(), "Pattern must be non-empty");
    let window = Window {
        offset,
        samples: &series[offset..offset + pattern.len()],
    };
    sad_window(window, pattern)
}

/// SAD against an already-built [`Window`].
#[inline]
pub fn sad_window(window: Window<'_>, pattern: &[f32]) -> f32 {
    debug_assert_eq!(window.len(), pattern.len());
    window
        .samples
        .iter()
        .zip(pattern)
        .map(|(s, p)| (s - p).abs())
        .sum()
}

/// Sum of Absolute Differences metric.
///
/// Raw, non-normalized: amplitude and offset of the samples both count. No
/// precomputation is needed, each window costs O(m).
#[derive(Debug, Clone, Copy, Default)]
pub struct SumAbsoluteDifference;

impl WindowMetric for SumAbsoluteDifference {
    #[inline(always)]
    fn distance(series: &[f32], pattern: &[f32], offset: usize) -> f32 {
        sad_distance(series, pattern, offset)
    }
}
