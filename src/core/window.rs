/// A borrowed window of the series: `len(pattern)` samples starting at `offset`.
///
/// Never owns or copies samples; it is a slice of the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    /// Start index of the window within the series.
    pub offset: usize,
    /// The samples `series[offset..offset + len]`.
    pub samples: &'a [f32],
}

impl<'a> Window<'a> {
    /// View `len` samples of `series` starting at `offset`.
    ///
    /// Returns `None` when the window would run past the end of the series.
    pub fn at(series: &'a [f32], offset: usize, len: usize) -> Option<Self> {
        let end = offset.checked_add(len)?;
        series.get(offset..end).map(|samples| Self { offset, samples })
    }

    /// Number of samples in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether every sample equals the corresponding pattern sample.
    pub fn matches_exactly(&self, pattern: &[f32]) -> bool {
        self.samples == pattern
    }
}

/// Number of valid window offsets: `series_len - pattern_len + 1`, or 0.
#[inline]
pub fn offset_limit(series_len: usize, pattern_len: usize) -> usize {
    if pattern_len > series_len {
        0
    } else {
        series_len - pattern_len + 1
    }
}
