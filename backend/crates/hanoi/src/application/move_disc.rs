//! Move Disc Use Case

use crate::application::find_session;
use crate::domain::controller::LockPolicy;
use crate::domain::repository::SessionRepository;
use crate::error::HanoiResult;
use kernel::id::SessionId;
use std::sync::Arc;

/// Input DTO for move disc
#[derive(Debug, Clone)]
pub struct MoveDiscInput {
    pub session_id: SessionId,
    pub from_tower: i64,
    pub to_tower: i64,
}

/// Move Disc Use Case
pub struct MoveDiscUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> MoveDiscUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, input: MoveDiscInput, policy: LockPolicy) -> HanoiResult<()> {
        let controller = find_session(self.session_repo.as_ref(), input.session_id).await?;

        match controller
            .make_move(input.from_tower, input.to_tower, policy)
            .await
        {
            Ok(()) => {
                tracing::debug!(
                    session_id = %input.session_id,
                    from_tower = input.from_tower,
                    to_tower = input.to_tower,
                    "Moved disc"
                );
                Ok(())
            }
            Err(e) => {
                tracing::debug!(
                    session_id = %input.session_id,
                    from_tower = input.from_tower,
                    to_tower = input.to_tower,
                    error = %e,
                    "Move rejected"
                );
                Err(e)
            }
        }
    }
}
