use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("No search result found")]
    NoResultFound,

    #[error("No search result found within a depth of {0}")]
    DepthLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
