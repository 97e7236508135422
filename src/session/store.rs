//! In-memory session store, one slot per user.
//!
//! The outer map lock is held only for lookup and insert. Each session sits
//! behind its own mutex so turns from the same user run one at a time while
//! different users never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::machine::TrainingSession;

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<TrainingSession>>>>,
}

impl SessionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Store the user's session, returning the one it displaced. A turn
    /// already running against the displaced session finishes against its
    /// own handle and is then dropped.
    pub async fn insert(
        &self,
        user_id: &str,
        session: TrainingSession,
    ) -> Option<Arc<Mutex<TrainingSession>>> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id.to_string(), Arc::new(Mutex::new(session)))
    }

    pub async fn get(&self, user_id: &str) -> Option<Arc<Mutex<TrainingSession>>> {
        let sessions = self.sessions.read().await;
        sessions.get(user_id).cloned()
    }

    /// Drop the user's session. Returns false when there was none.
    pub async fn remove(&self, user_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(user_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::catalog::ModuleKind;
    use crate::gateway::OfflineGateway;
    use crate::scoring::TurnScorer;
    use crate::session::SessionDeps;

    fn make_session(module: ModuleKind) -> TrainingSession {
        TrainingSession::create(
            module,
            &SessionDeps {
                scorer: Arc::new(TurnScorer::new()),
                gateway: Arc::new(OfflineGateway),
                gateway_timeout: Duration::from_millis(50),
            },
        )
    }

    #[tokio::test]
    async fn insert_then_get_returns_the_session() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        store.insert("ada", make_session(ModuleKind::Arena)).await;
        assert_eq!(store.len().await, 1);

        let session = store.get("ada").await.expect("session should be stored");
        assert_eq!(session.lock().await.module(), ModuleKind::Arena);
    }

    #[tokio::test]
    async fn get_unknown_user_is_none() {
        let store = SessionStore::new();
        assert!(store.get("nobody").await.is_none());
    }

    #[tokio::test]
    async fn insert_returns_the_displaced_session() {
        let store = SessionStore::new();
        assert!(
            store
                .insert("ada", make_session(ModuleKind::Upsell))
                .await
                .is_none()
        );

        let previous = store
            .insert("ada", make_session(ModuleKind::Objections))
            .await
            .expect("first session should be displaced");
        assert_eq!(previous.lock().await.module(), ModuleKind::Upsell);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_was_stored() {
        let store = SessionStore::new();
        store.insert("ada", make_session(ModuleKind::GuidedPath)).await;

        assert!(store.remove("ada").await);
        assert!(!store.remove("ada").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = SessionStore::new();
        store.insert("ada", make_session(ModuleKind::Arena)).await;
        store.insert("bob", make_session(ModuleKind::Upsell)).await;

        store.remove("ada").await;
        assert!(store.get("ada").await.is_none());
        assert!(store.get("bob").await.is_some());
    }
}
