use thiserror::Error;

/// Errors raised at the public search entry points.
///
/// A pattern longer than the series is not an error: it yields
/// [`MatchResult::none()`](crate::MatchResult::none).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern has no samples, so every distance would be zero.
    #[error("pattern must contain at least one sample")]
    EmptyPattern,

    /// A partitioned search was asked to run with fewer than one worker.
    #[error("invalid configuration: worker count must be >= 1, got {workers}")]
    InvalidConfiguration { workers: usize },

    /// The dedicated worker thread pool could not be started.
    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(String),
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;
