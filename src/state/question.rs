//! Question dispatch
//!
//! Turns the question at the cursor into the broadcast view, or ends the game
//! when the loaded set is exhausted.

use rand::seq::SliceRandom;

use super::{AppState, GameError, GameState};
use crate::protocol::ServerMessage;
use crate::types::*;

/// Correct and incorrect answers combined in a uniformly random order
pub fn shuffled_answers(question: &Question) -> Vec<String> {
    let mut answers = question.incorrect_answers.clone();
    answers.push(question.correct_answer.clone());
    answers.shuffle(&mut rand::rng());
    answers
}

impl AppState {
    /// Send the question at the cursor to everyone, or broadcast game-over
    /// with the final roster if there is none left. Refused while loading.
    pub async fn send_next_question(&self) -> Result<(), GameError> {
        let mut game = self.game.write().await;
        if game.phase == GamePhase::Loading {
            return Err(GameError::Loading);
        }

        self.dispatch_next_question(&mut game);
        Ok(())
    }

    /// Caller holds the write lock
    pub(super) fn dispatch_next_question(&self, game: &mut GameState) {
        let next = game.questions.get(game.cursor).map(|q| CurrentQuestion {
            question: q.question.clone(),
            correct_answer: q.correct_answer.clone(),
            answers: shuffled_answers(q),
        });

        match next {
            Some(current) => {
                game.cursor += 1;
                game.phase = GamePhase::InProgress;
                game.current_question = Some(current.clone());

                tracing::info!(
                    "Sending question {}/{}",
                    game.cursor,
                    game.questions.len()
                );
                self.broadcast_to_all(ServerMessage::NewQuestion(current));
            }
            None => {
                game.phase = GamePhase::Idle;
                game.current_question = None;

                tracing::info!("Question set exhausted, game over");
                self.broadcast_to_all(ServerMessage::GameOver(game.players.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_answers_contain_each_answer_once() {
        let question = &sample_questions(1)[0];

        for _ in 0..50 {
            let answers = shuffled_answers(question);
            assert_eq!(answers.len(), 4);
            assert_eq!(
                answers.iter().filter(|a| *a == &question.correct_answer).count(),
                1
            );

            let as_set: HashSet<_> = answers.iter().collect();
            let mut expected: HashSet<_> = question.incorrect_answers.iter().collect();
            expected.insert(&question.correct_answer);
            assert_eq!(as_set, expected);
        }
    }

    #[test]
    fn test_shuffle_produces_more_than_one_order() {
        let question = &sample_questions(1)[0];
        let orders: HashSet<Vec<String>> = (0..200).map(|_| shuffled_answers(question)).collect();

        // 24 permutations; 200 draws landing on a single one is effectively impossible
        assert!(orders.len() > 1);
    }

    #[tokio::test]
    async fn test_sends_questions_in_order_then_game_over() {
        let state = state_with_questions(2);
        {
            let mut game = state.game.write().await;
            game.questions = sample_questions(2);
        }
        let mut rx = state.subscribe();

        state.send_next_question().await.unwrap();
        state.send_next_question().await.unwrap();
        state.send_next_question().await.unwrap();

        let messages = drain(&mut rx);
        assert_eq!(messages.len(), 3);
        match (&messages[0], &messages[1], &messages[2]) {
            (
                ServerMessage::NewQuestion(first),
                ServerMessage::NewQuestion(second),
                ServerMessage::GameOver(_),
            ) => {
                assert_eq!(first.question, "Question 0?");
                assert_eq!(first.correct_answer, "right 0");
                assert_eq!(second.question, "Question 1?");
            }
            other => panic!("Unexpected broadcast sequence: {:?}", other),
        }

        let game = state.game.read().await;
        assert_eq!(game.phase, GamePhase::Idle);
        assert_eq!(game.cursor, 2);
        assert!(game.current_question.is_none());
    }

    #[tokio::test]
    async fn test_game_over_before_any_game() {
        let state = state_with_questions(5);
        let mut rx = state.subscribe();

        state.send_next_question().await.unwrap();

        let messages = drain(&mut rx);
        assert!(matches!(messages.as_slice(), [ServerMessage::GameOver(r)] if r.is_empty()));
    }

    #[tokio::test]
    async fn test_game_over_repeats_without_advancing() {
        let state = state_with_questions(1);
        state.start_game().await.unwrap();
        state.join(&"a".to_string(), "Alice".to_string()).await;
        let mut rx = state.subscribe();

        for _ in 0..3 {
            state.send_next_question().await.unwrap();
        }

        let messages = drain(&mut rx);
        assert_eq!(messages.len(), 3);
        for msg in &messages {
            match msg {
                ServerMessage::GameOver(roster) => assert_eq!(roster.len(), 1),
                other => panic!("Expected GameOver, got {:?}", other),
            }
        }
        assert_eq!(state.game.read().await.cursor, 1);
    }

    #[tokio::test]
    async fn test_refused_while_loading() {
        let state = state_with_questions(5);
        state.game.write().await.phase = GamePhase::Loading;
        let mut rx = state.subscribe();

        let result = state.send_next_question().await;

        assert!(matches!(result, Err(GameError::Loading)));
        assert!(drain(&mut rx).is_empty());
    }
}
