//! Game flow handlers
//!
//! Starting a game and advancing through its questions. Any connection may
//! send these; there is no host role.

use crate::protocol::ServerMessage;
use crate::state::AppState;
use crate::types::ConnectionId;
use std::sync::Arc;

/// Enter the loading phase right away, then fetch in the background so this
/// connection keeps receiving broadcasts while the request is in flight.
pub async fn handle_start_game(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
) -> Option<ServerMessage> {
    tracing::info!("Start game requested by {}", connection_id);

    if let Err(e) = state.begin_loading().await {
        tracing::warn!("Start game from {} refused: {}", connection_id, e);
        return Some(e.to_message());
    }

    let state_clone = state.clone();
    tokio::spawn(async move {
        // Failures are broadcast to every client by load_questions itself
        if let Err(e) = state_clone.load_questions().await {
            tracing::debug!("Game start aborted: {}", e);
        }
    });

    None
}

pub async fn handle_next_question(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
) -> Option<ServerMessage> {
    tracing::debug!("Next question requested by {}", connection_id);

    match state.send_next_question().await {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!("Next question from {} refused: {}", connection_id, e);
            Some(e.to_message())
        }
    }
}
