//! Query Session Use Case

use crate::application::find_session;
use crate::domain::controller::LockPolicy;
use crate::domain::entities::PuzzleState;
use crate::domain::repository::SessionRepository;
use crate::error::HanoiResult;
use kernel::id::SessionId;
use std::sync::Arc;

/// Read-only access to session state
pub struct QuerySessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> QuerySessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Snapshot of one session
    pub async fn get(&self, session_id: SessionId, policy: LockPolicy) -> HanoiResult<PuzzleState> {
        let controller = find_session(self.session_repo.as_ref(), session_id).await?;
        controller.state(policy).await
    }

    /// Snapshots of every live session, each taken under its own lock
    pub async fn list(&self, policy: LockPolicy) -> HanoiResult<Vec<PuzzleState>> {
        let controllers = self.session_repo.list().await;
        let mut states = Vec::with_capacity(controllers.len());
        for controller in controllers {
            states.push(controller.state(policy).await?);
        }
        Ok(states)
    }
}
