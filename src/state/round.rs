use super::AppState;
use crate::error::GameResult;
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    /// Start the first round
    pub async fn start_game(&self) -> GameResult<RoundInfo> {
        let round = self.session.write().await.start_game()?;
        self.broadcast_to_all(ServerMessage::RoundStarted {
            round: round.clone(),
        });
        Ok(round)
    }

    pub async fn next_round(&self) -> GameResult<RoundInfo> {
        let round = self.session.write().await.next_round()?;
        self.broadcast_to_all(ServerMessage::RoundStarted {
            round: round.clone(),
        });
        Ok(round)
    }

    /// Mark a player as having looked. The prompt is returned to the caller
    /// only; everyone else just learns who has looked.
    pub async fn view_prompt(&self, index: PlayerIndex) -> GameResult<ViewOutcome> {
        let mut session = self.session.write().await;
        let outcome = session.view_prompt(index)?;
        let statuses = session.view_states();
        drop(session);

        if outcome.prompt.is_some() {
            if outcome.status == RoundStatus::AllViewed {
                tracing::info!("All players have viewed their prompts");
            }
            self.broadcast_to_all(ServerMessage::ViewStatus {
                index,
                statuses,
                status: outcome.status,
            });
        }
        Ok(outcome)
    }

    /// Presentational only: the shared screen goes back to "pass the phone"
    pub fn hide_prompt(&self) {
        self.broadcast_to_all(ServerMessage::PromptHidden);
    }

    pub async fn reveal_official(&self) -> GameResult<OfficialReveal> {
        let reveal = self.session.read().await.reveal_official()?;
        self.broadcast_to_all(reveal.clone().into());
        Ok(reveal)
    }

    pub async fn reveal_all(&self) -> GameResult<FullReveal> {
        let reveal = self.session.read().await.reveal_all()?;
        self.broadcast_to_all(reveal.clone().into());
        Ok(reveal)
    }

    /// Back to setup, keeping players
    pub async fn reset_game(&self) -> SessionSnapshot {
        let mut session = self.session.write().await;
        session.reset();
        let snapshot = session.snapshot();
        drop(session);

        self.broadcast_to_all(ServerMessage::GameReset {
            snapshot: snapshot.clone(),
        });
        snapshot
    }
}
