mod game;
mod player;
mod question;

use crate::protocol::ServerMessage;
use crate::trivia::{QuestionSource, TriviaError};
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Capacity of the broadcast channel; slower receivers skip older messages
const BROADCAST_CAPACITY: usize = 100;

/// Errors surfaced to clients when a game operation is refused or fails
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Questions are still loading")]
    Loading,

    #[error("Failed to load questions: {0}")]
    Fetch(#[from] TriviaError),
}

impl GameError {
    /// Wire error code for `ServerMessage::Error`
    pub fn code(&self) -> &'static str {
        match self {
            GameError::Loading => "GAME_LOADING",
            GameError::Fetch(_) => "FETCH_FAILED",
        }
    }

    pub fn to_message(&self) -> ServerMessage {
        ServerMessage::error(self.code(), self.to_string())
    }
}

/// The single game all connections share. Every slot is read and written
/// under one lock, and broadcasts go out before that lock is released.
#[derive(Debug)]
pub struct GameState {
    pub phase: GamePhase,
    pub players: Roster,
    pub questions: Vec<Question>,
    /// Index of the next question to send
    pub cursor: usize,
    pub current_question: Option<CurrentQuestion>,
    /// Phase and question in play to return to if the in-flight load fails
    resume_phase: GamePhase,
    resume_question: Option<CurrentQuestion>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            players: Roster::new(),
            questions: Vec::new(),
            cursor: 0,
            current_question: None,
            resume_phase: GamePhase::Idle,
            resume_question: None,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<RwLock<GameState>>,
    /// Broadcast channel for messages every connection receives
    pub broadcast: broadcast::Sender<ServerMessage>,
    pub source: Arc<dyn QuestionSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        let (tx, _rx) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            game: Arc::new(RwLock::new(GameState::default())),
            broadcast: tx,
            source,
        }
    }

    /// Send a message to every connected client
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        // Ignore send errors (no receivers connected is fine)
        let _ = self.broadcast.send(msg);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerMessage> {
        self.broadcast.subscribe()
    }
}
