//! Check Completion Use Case

use crate::application::find_session;
use crate::domain::controller::LockPolicy;
use crate::domain::repository::SessionRepository;
use crate::error::HanoiResult;
use kernel::id::SessionId;
use std::sync::Arc;

/// Check Completion Use Case
pub struct CheckCompletionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckCompletionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Whether every disc is on the session's target tower
    pub async fn execute(&self, session_id: SessionId, policy: LockPolicy) -> HanoiResult<bool> {
        let controller = find_session(self.session_repo.as_ref(), session_id).await?;
        let complete = controller.is_complete(policy).await?;

        if complete {
            tracing::info!(session_id = %session_id, "Puzzle solved");
        }

        Ok(complete)
    }
}
