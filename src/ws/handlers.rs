//! WebSocket message dispatch
//!
//! Public results reach every client (including the sender) through the
//! broadcast channel, so handlers only return what is meant for the sender
//! alone: the player's own prompt, or an error.

use crate::error::GameError;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;

/// Turn a failed operation into an error reply; successes reply nothing
fn reply_on_error<T>(result: Result<T, GameError>, action: &str) -> Option<ServerMessage> {
    match result {
        Ok(_) => None,
        Err(e) => {
            tracing::info!("Rejected {}: {}", action, e);
            Some(e.into())
        }
    }
}

/// Handle client messages and return optional response
pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    match msg {
        ClientMessage::AddPlayer { name } => {
            reply_on_error(state.add_player(&name).await, "add player")
        }

        ClientMessage::StartGame => {
            tracing::info!("Starting game");
            reply_on_error(state.start_game().await, "start game")
        }

        ClientMessage::ViewPrompt { index } => match state.view_prompt(index).await {
            Ok(outcome) => outcome
                .prompt
                .map(|prompt| ServerMessage::Prompt { index, prompt }),
            Err(e) => {
                tracing::info!("Rejected view prompt {}: {}", index, e);
                Some(e.into())
            }
        },

        ClientMessage::HidePrompt => {
            state.hide_prompt();
            None
        }

        ClientMessage::RevealOfficial => {
            reply_on_error(state.reveal_official().await, "official reveal")
        }

        ClientMessage::RevealAll => reply_on_error(state.reveal_all().await, "full reveal"),

        ClientMessage::NextRound => {
            tracing::info!("Starting next round");
            reply_on_error(state.next_round().await, "next round")
        }

        ClientMessage::ResetGame => {
            state.reset_game().await;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::PhraseBook;
    use crate::session::GameSession;
    use crate::types::DrawPolicy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(GameSession::new(
            PhraseBook::builtin().unwrap(),
            DrawPolicy::NoRepeat,
            3,
            StdRng::seed_from_u64(4),
        )))
    }

    fn error_code(msg: Option<ServerMessage>) -> String {
        match msg {
            Some(ServerMessage::Error { code, .. }) => code,
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_player_errors() {
        let state = state();
        let add = |name: &str| ClientMessage::AddPlayer {
            name: name.to_string(),
        };

        assert!(handle_message(add("A"), &state).await.is_none());
        assert_eq!(error_code(handle_message(add("A"), &state).await), "DUPLICATE");
        assert_eq!(error_code(handle_message(add("  "), &state).await), "EMPTY");
        assert_eq!(state.get_players().await, vec!["A".to_string()]);
    }

    #[tokio::test]
    async fn test_start_with_too_few_players() {
        let state = state();
        let result = handle_message(ClientMessage::StartGame, &state).await;
        assert_eq!(error_code(result), "INVALID_STATE");
    }

    #[tokio::test]
    async fn test_view_prompt_replies_once() {
        let state = state();
        for name in ["A", "B", "C"] {
            state.add_player(name).await.unwrap();
        }
        handle_message(ClientMessage::StartGame, &state).await;

        let first = handle_message(ClientMessage::ViewPrompt { index: 0 }, &state).await;
        assert!(matches!(first, Some(ServerMessage::Prompt { index: 0, .. })));

        let second = handle_message(ClientMessage::ViewPrompt { index: 0 }, &state).await;
        assert!(second.is_none());

        let bad = handle_message(ClientMessage::ViewPrompt { index: 9 }, &state).await;
        assert_eq!(error_code(bad), "OUT_OF_RANGE");
    }

    #[tokio::test]
    async fn test_hide_prompt_broadcasts() {
        let state = state();
        let mut rx = state.broadcast.subscribe();
        assert!(handle_message(ClientMessage::HidePrompt, &state).await.is_none());
        assert_eq!(rx.recv().await.unwrap(), ServerMessage::PromptHidden);
    }
}
