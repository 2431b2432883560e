//! Hanoi Error Types
//!
//! Puzzle-specific error variants that integrate with the unified
//! `kernel::error::AppError` system at the transport boundary.

use kernel::error::app_error::AppError;
use kernel::id::SessionId;
use std::time::Duration;
use thiserror::Error;

use crate::domain::value_objects::{TowerIndex, TowerRole};

/// Hanoi-specific result type alias
pub type HanoiResult<T> = Result<T, HanoiError>;

/// Coarse failure classes a caller can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input or illegal move; state was not touched
    InvalidArgument,
    /// The session lock could not be acquired under the caller's policy
    LockTimeout,
    /// No session with the requested id
    NotFound,
}

/// Hanoi-specific error variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error("numberOfDiscs {0} is invalid")]
    InvalidDiscCount(i64),

    #[error("{role} {value} is invalid")]
    InvalidTower { role: TowerRole, value: i64 },

    #[error("source may not equal target")]
    SameTower,

    #[error("source {0} is empty")]
    EmptyTower(TowerIndex),

    /// Disc sizes are 1-based
    #[error("cannot put disc {moving} on top of disc {resting}")]
    LargerOnSmaller { moving: u32, resting: u32 },

    #[error("least significant set bit is undefined for 0")]
    NoSetBits,

    #[error("lock not acquired within {0:?}")]
    LockTimeout(Duration),

    /// Single attempt under the non-blocking policy
    #[error("lock is held")]
    LockHeld,

    #[error("no such session {0}")]
    SessionNotFound(SessionId),
}

impl HanoiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HanoiError::InvalidDiscCount(_)
            | HanoiError::InvalidTower { .. }
            | HanoiError::SameTower
            | HanoiError::EmptyTower(_)
            | HanoiError::LargerOnSmaller { .. }
            | HanoiError::NoSetBits => ErrorCategory::InvalidArgument,
            HanoiError::LockTimeout(_) | HanoiError::LockHeld => ErrorCategory::LockTimeout,
            HanoiError::SessionNotFound(_) => ErrorCategory::NotFound,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.category() == ErrorCategory::InvalidArgument
    }
}

impl From<HanoiError> for AppError {
    fn from(err: HanoiError) -> Self {
        let message = err.to_string();
        let app = match err.category() {
            ErrorCategory::InvalidArgument => AppError::unprocessable(message),
            ErrorCategory::LockTimeout => AppError::service_unavailable(message),
            ErrorCategory::NotFound => AppError::not_found(message),
        };
        app.with_source(err)
    }
}
