//! Towers of Hanoi Session Service
//!
//! Clean Architecture structure:
//! - `domain/` - Puzzle state, move rules, per-session locking, repository traits
//! - `application/` - Use cases
//! - `infra/` - In-memory session registry
//! - `presentation/` - HTTP handlers
//!
//! ## Concurrency Model
//! - Each session's state sits behind its own lock; sessions never contend
//! - Callers pick a lock policy per call: block, bounded wait, or fail fast
//! - Session ids come from one atomic sequence shared by the process

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::HanoiConfig;
pub use domain::controller::{LockPolicy, PuzzleController};
pub use domain::entities::PuzzleState;
pub use error::{ErrorCategory, HanoiError, HanoiResult};
pub use infra::memory::InMemorySessionRepository;
pub use presentation::router::hanoi_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
