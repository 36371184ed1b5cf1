use super::{AppState, GameError};
use crate::trivia::validate_questions;
use crate::types::*;

impl AppState {
    /// Enter the loading phase. Fails if a load is already in flight.
    /// Sets the question in play aside so nothing can be scored against the
    /// old set while the new one is fetched.
    pub async fn begin_loading(&self) -> Result<(), GameError> {
        let mut game = self.game.write().await;
        if game.phase == GamePhase::Loading {
            return Err(GameError::Loading);
        }

        let previous = game.phase;
        game.resume_phase = previous;
        game.phase = GamePhase::Loading;
        let in_play = game.current_question.take();
        game.resume_question = in_play;

        tracing::info!("Loading questions from {}", self.source.name());
        Ok(())
    }

    /// Fetch and validate a question set, then start the game with it.
    /// Must follow a successful `begin_loading`. On failure the previous
    /// phase and question are restored and an error is broadcast to every client.
    pub async fn load_questions(&self) -> Result<(), GameError> {
        let fetched = self
            .source
            .fetch_questions()
            .await
            .and_then(validate_questions);

        match fetched {
            Ok(questions) => {
                let mut game = self.game.write().await;
                tracing::info!("Loaded {} questions, starting game", questions.len());

                game.questions = questions;
                game.cursor = 0;
                game.resume_question = None;
                self.dispatch_next_question(&mut game);
                Ok(())
            }
            Err(e) => {
                let err = GameError::Fetch(e);
                self.abort_loading(&err).await;
                Err(err)
            }
        }
    }

    /// Put back the phase and question that were in play before loading
    async fn abort_loading(&self, error: &GameError) {
        let mut game = self.game.write().await;
        let previous = game.resume_phase;
        game.phase = previous;
        let in_play = game.resume_question.take();
        game.current_question = in_play;

        tracing::error!("{}", error);
        self.broadcast_to_all(error.to_message());
    }

    /// Load a fresh question set and send its first question
    pub async fn start_game(&self) -> Result<(), GameError> {
        self.begin_loading().await?;
        self.load_questions().await
    }

    /// Read-only summary for the status endpoint
    pub async fn status(&self) -> GameStatus {
        let game = self.game.read().await;
        GameStatus {
            phase: game.phase,
            question_index: game.cursor,
            question_count: game.questions.len(),
            player_count: game.players.len(),
        }
    }
}
