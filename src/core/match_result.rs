use std::ops::Range;

use crate::core::error::{SearchError, SearchResult};

/// How the offset space is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Single loop over every offset in order.
    Sequential,
    /// Offsets split into `workers` contiguous ranges scanned independently.
    Partitioned {
        /// Requested number of workers. Capped at the number of offsets.
        workers: usize,
    },
}

/// Configuration for a subsequence search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Execution strategy.
    pub strategy: ExecutionStrategy,
    /// Let partitioned workers stop once a lower-indexed worker has found an
    /// exact match. Never changes the result.
    pub cancel_on_exact: bool,
}

impl SearchConfig {
    pub fn sequential() -> Self {
        Self {
            strategy: ExecutionStrategy::Sequential,
            cancel_on_exact: false,
        }
    }

    pub fn partitioned(workers: usize) -> Self {
        Self {
            strategy: ExecutionStrategy::Partitioned { workers },
            cancel_on_exact: false,
        }
    }

    pub fn with_cancel_on_exact(mut self, enabled: bool) -> Self {
        self.cancel_on_exact = enabled;
        self
    }

    /// Number of workers the strategy asks for (1 for sequential).
    pub fn workers(&self) -> usize {
        match self.strategy {
            ExecutionStrategy::Sequential => 1,
            ExecutionStrategy::Partitioned { workers } => workers,
        }
    }

    /// Reject configurations no search can run with.
    pub fn validate(&self) -> SearchResult<()> {
        match self.strategy {
            ExecutionStrategy::Partitioned { workers: 0 } => {
                Err(SearchError::InvalidConfiguration { workers: 0 })
            }
            _ => Ok(()),
        }
    }
}

impl Default for SearchConfig {
    /// Partitioned over the machine's available parallelism.
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::partitioned(workers)
    }
}

/// Best alignment found by a search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Offset of the best window, `None` if no valid offset exists.
    pub offset: Option<usize>,
    /// SAD distance at `offset`, `+inf` when `offset` is `None`.
    #[cfg_attr(feature = "serde", serde(with = "distance_serde"))]
    pub distance: f32,
}

/// JSON has no infinity: non-finite distances are written as `null` and read
/// back as `+inf`.
#[cfg(feature = "serde")]
mod distance_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(distance: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        distance
            .is_finite()
            .then_some(*distance)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::INFINITY))
    }
}

impl MatchResult {
    /// The "no valid offset" result: `(None, +inf)`.
    pub const fn none() -> Self {
        Self {
            offset: None,
            distance: f32::INFINITY,
        }
    }

    pub const fn found(offset: usize, distance: f32) -> Self {
        Self {
            offset: Some(offset),
            distance,
        }
    }

    pub fn is_found(&self) -> bool {
        self.offset.is_some()
    }

    /// Whether the best window is an exact element-wise match.
    pub fn is_exact(&self) -> bool {
        self.offset.is_some() && self.distance == 0.0
    }

    /// Offset as a signed integer with `-1` meaning "no valid offset".
    pub fn offset_or_sentinel(&self) -> i64 {
        self.offset.map_or(-1, |o| o as i64)
    }

    /// Record `distance` at `offset` if it is strictly smaller than the current best.
    ///
    /// Offsets must be offered in increasing order for first-wins tie-breaking.
    /// NaN distances never replace the current best.
    #[inline(always)]
    pub fn update(&mut self, offset: usize, distance: f32) -> bool {
        if distance < self.distance {
            self.distance = distance;
            self.offset = Some(offset);
            true
        } else {
            false
        }
    }

    /// Merge another partial result into this one.
    ///
    /// Smaller distance wins; on equal distances the lower offset wins, so the
    /// merge is order-independent and agrees with a sequential scan.
    pub fn merge(&mut self, other: &MatchResult) {
        let Some(other_offset) = other.offset else {
            return;
        };
        let takes_over = other.distance < self.distance
            || (other.distance == self.distance
                && self.offset.map_or(true, |current| other_offset < current));
        if takes_over {
            *self = *other;
        }
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::none()
    }
}

/// Contiguous half-open block `[start, end)` of offsets assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRange {
    pub start: usize,
    pub end: usize,
}

impl SearchRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "SearchRange start {start} > end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn offsets(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.offsets().contains(&offset)
    }
}
