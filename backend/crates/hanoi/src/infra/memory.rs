//! In-memory Repository Implementation

use kernel::id::SessionId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::controller::PuzzleController;
use crate::domain::repository::SessionRepository;

/// Process-local session registry
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<BTreeMap<SessionId, Arc<PuzzleController>>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, controller: Arc<PuzzleController>) {
        self.sessions.write().await.insert(controller.id(), controller);
    }

    async fn get(&self, session_id: SessionId) -> Option<Arc<PuzzleController>> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    async fn list(&self) -> Vec<Arc<PuzzleController>> {
        self.sessions.read().await.values().cloned().collect()
    }

    async fn remove(&self, session_id: SessionId) -> bool {
        self.sessions.write().await.remove(&session_id).is_some()
    }
}
