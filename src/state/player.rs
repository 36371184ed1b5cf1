use super::AppState;
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    /// Register this connection as a player with score zero, replacing any
    /// earlier entry for the same connection, and broadcast the roster
    pub async fn join(&self, connection_id: &ConnectionId, name: String) -> Roster {
        let mut game = self.game.write().await;
        game.players
            .insert(connection_id.clone(), Player::new(name.clone()));

        tracing::info!("Player {} joined as {:?}", connection_id, name);

        let roster = game.players.clone();
        self.broadcast_to_all(ServerMessage::PlayersUpdated(roster.clone()));
        roster
    }

    /// Score one point if `answer` matches the question currently in play and
    /// this connection has joined. The roster is broadcast either way.
    /// Returns true if a point was awarded.
    pub async fn submit_answer(&self, connection_id: &ConnectionId, answer: &str) -> bool {
        let mut game = self.game.write().await;

        let is_correct = game
            .current_question
            .as_ref()
            .is_some_and(|q| q.correct_answer == answer);

        let scored = match game.players.get_mut(connection_id) {
            Some(player) if is_correct => {
                player.score += 1;
                tracing::info!("{} answered correctly (score {})", player.name, player.score);
                true
            }
            Some(player) => {
                tracing::debug!("{} answered {:?}, no point", player.name, answer);
                false
            }
            None => {
                tracing::debug!("Answer from unregistered connection {}", connection_id);
                false
            }
        };

        self.broadcast_to_all(ServerMessage::PlayersUpdated(game.players.clone()));
        scored
    }

    /// Drop this connection's player entry and broadcast the roster
    pub async fn remove_player(&self, connection_id: &ConnectionId) -> Option<Player> {
        let mut game = self.game.write().await;
        let removed = game.players.remove(connection_id);

        if let Some(ref player) = removed {
            tracing::info!("Player {} ({}) left", player.name, connection_id);
        }

        self.broadcast_to_all(ServerMessage::PlayersUpdated(game.players.clone()));
        removed
    }

    /// Current roster snapshot
    pub async fn roster(&self) -> Roster {
        self.game.read().await.players.clone()
    }
}
