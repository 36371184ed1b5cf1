//! Player message handlers
//!
//! Joining, answering, and leaving. Each of these broadcasts the roster.

use crate::protocol::ServerMessage;
use crate::state::AppState;
use crate::types::ConnectionId;
use std::sync::Arc;

pub async fn handle_player_joined(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    name: String,
) -> Option<ServerMessage> {
    state.join(connection_id, name).await;
    None
}

pub async fn handle_submit_answer(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    answer: String,
) -> Option<ServerMessage> {
    state.submit_answer(connection_id, &answer).await;
    None
}

pub async fn handle_disconnect(state: &Arc<AppState>, connection_id: &ConnectionId) {
    state.remove_player(connection_id).await;
}
