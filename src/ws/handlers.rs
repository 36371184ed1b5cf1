//! WebSocket message dispatch
//!
//! Entry point for inbound client events. Broadcasts go out through
//! `AppState`; the returned message, if any, is a direct reply to the sender.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::types::ConnectionId;
use std::sync::Arc;

use super::{game, player};

/// Handle a client message and return an optional reply for that client only
pub async fn handle_message(
    msg: ClientMessage,
    connection_id: &ConnectionId,
    state: &Arc<AppState>,
) -> Option<ServerMessage> {
    match msg {
        ClientMessage::PlayerJoined(name) => {
            player::handle_player_joined(state, connection_id, name).await
        }

        ClientMessage::SubmitAnswer(answer) => {
            player::handle_submit_answer(state, connection_id, answer).await
        }

        ClientMessage::StartGame => game::handle_start_game(state, connection_id).await,

        ClientMessage::NextQuestion => game::handle_next_question(state, connection_id).await,
    }
}

/// Transport-level disconnect: forget the player and tell everyone
pub async fn handle_disconnect(connection_id: &ConnectionId, state: &Arc<AppState>) {
    player::handle_disconnect(state, connection_id).await;
}
