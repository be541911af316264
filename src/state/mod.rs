mod player;
mod round;

use crate::config::GameConfig;
use crate::error::PhraseBookError;
use crate::protocol::ServerMessage;
use crate::session::GameSession;
use crate::types::SessionSnapshot;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<GameSession>>,
    /// Broadcast channel for messages every connected client should see
    pub broadcast: broadcast::Sender<ServerMessage>,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            session: Arc::new(RwLock::new(session)),
            broadcast: tx,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, PhraseBookError> {
        Ok(Self::new(config.build_session()?))
    }

    /// Send to all connected clients. No receivers is fine.
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        let _ = self.broadcast.send(msg);
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    pub async fn themes(&self) -> Vec<String> {
        self.session.read().await.book().themes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::phrases::PhraseBook;
    use crate::session::DEFAULT_MIN_PLAYERS;
    use crate::types::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> AppState {
        AppState::new(GameSession::new(
            PhraseBook::builtin().unwrap(),
            DrawPolicy::NoRepeat,
            DEFAULT_MIN_PLAYERS,
            StdRng::seed_from_u64(8),
        ))
    }

    async fn with_players(names: &[&str]) -> AppState {
        let state = state();
        for n in names {
            state.add_player(n).await.unwrap();
        }
        state
    }

    #[tokio::test]
    async fn test_add_player_broadcasts_list() {
        let state = state();
        let mut rx = state.broadcast.subscribe();

        state.add_player("Ana").await.unwrap();
        match rx.recv().await.unwrap() {
            ServerMessage::Players { players, can_start } => {
                assert_eq!(players, vec!["Ana".to_string()]);
                assert!(!can_start);
            }
            other => panic!("Expected Players, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_add_does_not_broadcast() {
        let state = with_players(&["A"]).await;
        let mut rx = state.broadcast.subscribe();

        let result = state.add_player("A").await;
        assert_eq!(result, Err(GameError::Duplicate("A".to_string())));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_start_game_lifecycle() {
        let state = with_players(&["A", "B", "C"]).await;
        let mut rx = state.broadcast.subscribe();

        let round = state.start_game().await.unwrap();
        assert_eq!(round.round_no, 1);
        assert!(matches!(
            rx.recv().await.unwrap(),
            ServerMessage::RoundStarted { .. }
        ));

        let snap = state.snapshot().await;
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.round_status, Some(RoundStatus::InProgress));
    }

    #[tokio::test]
    async fn test_view_prompt_broadcasts_status_only() {
        let state = with_players(&["A", "B", "C"]).await;
        state.start_game().await.unwrap();
        let mut rx = state.broadcast.subscribe();

        let outcome = state.view_prompt(1).await.unwrap();
        let prompt = outcome.prompt.expect("first view returns the prompt");

        match rx.recv().await.unwrap() {
            ServerMessage::ViewStatus {
                index,
                statuses,
                status,
            } => {
                assert_eq!(index, 1);
                assert_eq!(statuses[1], ViewState::Viewed);
                assert_eq!(status, RoundStatus::InProgress);
            }
            other => panic!("Expected ViewStatus, got {:?}", other),
        }

        // The prompt text itself never goes out on the shared channel
        while let Ok(msg) = rx.try_recv() {
            let json = serde_json::to_string(&msg).unwrap();
            assert!(!json.contains(&prompt.prompt));
        }
    }

    #[tokio::test]
    async fn test_reveal_flow() {
        let state = with_players(&["A", "B", "C"]).await;
        state.start_game().await.unwrap();

        assert!(state.reveal_official().await.is_err());
        for i in 0..3 {
            state.view_prompt(i).await.unwrap();
        }
        let official = state.reveal_official().await.unwrap();
        let full = state.reveal_all().await.unwrap();
        assert_eq!(official.theme, full.theme);
        assert!(["A", "B", "C"].contains(&full.impostor_name.as_str()));
    }

    #[tokio::test]
    async fn test_reset_game() {
        let state = with_players(&["A", "B", "C"]).await;
        state.start_game().await.unwrap();

        let snap = state.reset_game().await;
        assert_eq!(snap.phase, GamePhase::Setup);
        assert_eq!(snap.players.len(), 3);
        assert_eq!(snap.round_no, 0);
    }

    #[tokio::test]
    async fn test_themes() {
        let state = state();
        assert_eq!(state.themes().await.len(), 12);
    }
}
