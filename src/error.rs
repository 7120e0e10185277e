//! Error types for proximity structure computation
//!
//! The geometry core itself is total: every builder degrades to an empty
//! result instead of failing. Errors only surface at the boundary where
//! callers hand in configuration, mode names, or point ids.

use thiserror::Error;

/// Errors that can occur while configuring a computation or editing a point set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProximityError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A mode name outside the closed set of graph modes
    #[error("unknown graph mode: {0:?}")]
    UnknownMode(String),
    /// Requested point id is not alive in the point set
    #[error("point not found: {0}")]
    PointNotFound(u64),
}

/// Result type alias for proximity operations
pub type Result<T> = std::result::Result<T, ProximityError>;
