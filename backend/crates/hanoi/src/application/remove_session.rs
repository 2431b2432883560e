//! Remove Session Use Case

use crate::domain::repository::SessionRepository;
use crate::error::{HanoiError, HanoiResult};
use kernel::id::SessionId;
use std::sync::Arc;

/// Remove Session Use Case
pub struct RemoveSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> RemoveSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Drop a session; in-flight operations holding its controller finish
    /// against the detached state
    pub async fn execute(&self, session_id: SessionId) -> HanoiResult<()> {
        if !self.session_repo.remove(session_id).await {
            return Err(HanoiError::SessionNotFound(session_id));
        }

        tracing::info!(session_id = %session_id, "Removed session");
        Ok(())
    }
}
