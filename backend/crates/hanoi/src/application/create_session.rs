//! Create Session Use Case

use crate::application::config::HanoiConfig;
use crate::domain::controller::PuzzleController;
use crate::domain::repository::SessionRepository;
use crate::error::HanoiResult;
use kernel::id::SessionId;
use std::sync::Arc;

/// Input DTO for create session; `None` fields take configured defaults
#[derive(Debug, Clone, Default)]
pub struct CreateSessionInput {
    pub number_of_discs: Option<i64>,
    pub from_tower: Option<i64>,
    pub to_tower: Option<i64>,
}

/// Create Session Use Case
pub struct CreateSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<HanoiConfig>,
}

impl<S> CreateSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<HanoiConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: CreateSessionInput) -> HanoiResult<SessionId> {
        let discs = input
            .number_of_discs
            .unwrap_or(self.config.default_disc_count);
        let from = input.from_tower.unwrap_or(self.config.default_from_tower);
        let to = input.to_tower.unwrap_or(self.config.default_to_tower);

        let controller = PuzzleController::new(discs, from, to)?;
        let session_id = controller.id();
        self.session_repo.insert(Arc::new(controller)).await;

        tracing::info!(
            session_id = %session_id,
            discs,
            from_tower = from,
            to_tower = to,
            "Created session"
        );

        Ok(session_id)
    }
}
