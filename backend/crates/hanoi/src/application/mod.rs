//! Application Layer - Use Cases
//!
//! This layer orchestrates the domain against the session registry.

pub mod check_completion;
pub mod config;
pub mod create_session;
pub mod move_disc;
pub mod query_session;
pub mod remove_session;

use kernel::id::SessionId;
use std::sync::Arc;

use crate::domain::controller::PuzzleController;
use crate::domain::repository::SessionRepository;
use crate::error::{HanoiError, HanoiResult};

/// Resolve a session or fail with `SessionNotFound`
async fn find_session<S>(repo: &S, session_id: SessionId) -> HanoiResult<Arc<PuzzleController>>
where
    S: SessionRepository,
{
    repo.get(session_id)
        .await
        .ok_or(HanoiError::SessionNotFound(session_id))
}
