use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque per-connection identity (a ULID assigned on upgrade)
pub type ConnectionId = String;

/// Full roster snapshot, keyed by connection. Ordered so broadcasts are stable.
pub type Roster = BTreeMap<ConnectionId, Player>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// No question set loaded, or the last set is exhausted
    Idle,
    /// A question fetch is in flight
    Loading,
    /// Cursor is within the loaded question set
    InProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self { name, score: 0 }
    }
}

/// A question as delivered by the trivia source. Strings are kept verbatim
/// (Open Trivia DB returns them HTML-entity encoded).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Question format as reported by the source, e.g. "multiple"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            category: None,
            difficulty: None,
            kind: None,
        }
    }
}

/// The question currently in play, as broadcast to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentQuestion {
    pub question: String,
    pub correct_answer: String,
    /// Correct and incorrect answers in shuffled order
    pub answers: Vec<String>,
}

/// Read-only summary of the game for the HTTP status endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub phase: GamePhase,
    /// Index of the next question to send
    pub question_index: usize,
    pub question_count: usize,
    pub player_count: usize,
}
