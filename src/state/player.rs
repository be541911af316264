use super::AppState;
use crate::error::GameResult;
use crate::protocol::ServerMessage;

impl AppState {
    /// Add a player during setup and broadcast the new list
    pub async fn add_player(&self, name: &str) -> GameResult<Vec<String>> {
        let mut session = self.session.write().await;
        let players = session.add_player(name)?.to_vec();
        let can_start = players.len() >= session.min_players();
        drop(session);

        self.broadcast_to_all(ServerMessage::Players {
            players: players.clone(),
            can_start,
        });
        Ok(players)
    }

    pub async fn get_players(&self) -> Vec<String> {
        self.session.read().await.players().to_vec()
    }
}
