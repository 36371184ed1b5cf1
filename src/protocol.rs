use crate::types::*;
use serde::{Deserialize, Serialize};

/// Inbound events. Frames look like `{"event": "player-joined", "data": "Alice"}`;
/// events without a payload omit `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Register (or re-register) this connection under a display name
    PlayerJoined(String),
    /// Answer text for the question currently in play
    SubmitAnswer(String),
    /// Fetch a fresh question set and send its first question
    StartGame,
    /// Send the following question, or game-over when the set is exhausted
    NextQuestion,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// Sent once, directly, to a freshly upgraded connection
    Welcome {
        #[serde(rename = "connectionId")]
        connection_id: ConnectionId,
        #[serde(rename = "serverNow")]
        server_now: String,
    },
    PlayersUpdated(Roster),
    NewQuestion(CurrentQuestion),
    GameOver(Roster),
    Error {
        code: String,
        msg: String,
    },
}

impl ServerMessage {
    pub fn error(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            msg: msg.into(),
        }
    }
}
