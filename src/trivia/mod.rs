mod opentdb;

use async_trait::async_trait;
use std::time::Duration;

use crate::types::Question;

pub use opentdb::OpenTdbClient;

/// Result type for question source operations
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Errors that can occur while fetching a question set
#[derive(Debug, thiserror::Error)]
pub enum TriviaError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Trivia API returned status {0}")]
    Status(u16),

    #[error("Trivia API returned response code {code} ({})", describe_response_code(.code))]
    Api { code: u8 },

    #[error("Response parsing failed: {0}")]
    Parse(String),

    #[error("Invalid question set: {0}")]
    Invalid(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Open Trivia DB response codes
fn describe_response_code(code: &u8) -> &'static str {
    match *code {
        0 => "success",
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown",
    }
}

/// Anything that can produce a fresh, ordered question set for one game
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self) -> TriviaResult<Vec<Question>>;

    /// Name used in logs
    fn name(&self) -> &str;
}

/// Serves the same fixed question list on every fetch
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    questions: Vec<Question>,
}

impl StaticQuestionSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch_questions(&self) -> TriviaResult<Vec<Question>> {
        Ok(self.questions.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Check a fetched question set before it is accepted into game state
pub fn validate_questions(questions: Vec<Question>) -> TriviaResult<Vec<Question>> {
    if questions.is_empty() {
        return Err(TriviaError::Invalid("no questions returned".to_string()));
    }

    for (index, q) in questions.iter().enumerate() {
        if q.question.trim().is_empty() {
            return Err(TriviaError::Invalid(format!(
                "question {} has empty text",
                index
            )));
        }
        if q.correct_answer.trim().is_empty() {
            return Err(TriviaError::Invalid(format!(
                "question {} has an empty correct answer",
                index
            )));
        }
        if q.incorrect_answers.is_empty() {
            return Err(TriviaError::Invalid(format!(
                "question {} has no incorrect answers",
                index
            )));
        }
        if q.incorrect_answers.iter().any(|a| a.trim().is_empty()) {
            return Err(TriviaError::Invalid(format!(
                "question {} has an empty incorrect answer",
                index
            )));
        }
        // Scoring compares text, so a duplicate would make the answer list ambiguous
        if q.incorrect_answers.contains(&q.correct_answer) {
            return Err(TriviaError::Invalid(format!(
                "question {} lists its correct answer as incorrect",
                index
            )));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: &str, incorrect: &[&str]) -> Question {
        Question::new(
            text,
            correct,
            incorrect.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_accepts_well_formed_set() {
        let questions = vec![
            question("2 + 2?", "4", &["3", "5", "22"]),
            question("Largest planet?", "Jupiter", &["Mars", "Venus", "Earth"]),
        ];

        let accepted = validate_questions(questions.clone()).unwrap();
        assert_eq!(accepted, questions);
    }

    #[test]
    fn test_rejects_empty_set() {
        let err = validate_questions(vec![]).unwrap_err();
        assert!(matches!(err, TriviaError::Invalid(_)));
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let err = validate_questions(vec![question("  ", "4", &["3"])]).unwrap_err();
        assert!(err.to_string().contains("empty text"));

        let err = validate_questions(vec![question("2 + 2?", "", &["3"])]).unwrap_err();
        assert!(err.to_string().contains("empty correct answer"));

        let err = validate_questions(vec![question("2 + 2?", "4", &[])]).unwrap_err();
        assert!(err.to_string().contains("no incorrect answers"));

        let err = validate_questions(vec![question("2 + 2?", "4", &["3", " "])]).unwrap_err();
        assert!(err.to_string().contains("empty incorrect answer"));
    }

    #[test]
    fn test_rejects_correct_answer_among_incorrect() {
        let err =
            validate_questions(vec![question("2 + 2?", "4", &["3", "4", "5"])]).unwrap_err();
        assert!(err.to_string().contains("question 0"));
    }

    #[test]
    fn test_reports_failing_index() {
        let err = validate_questions(vec![
            question("2 + 2?", "4", &["3"]),
            question("", "x", &["y"]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("question 1"));
    }

    #[test]
    fn test_api_error_message() {
        let err = TriviaError::Api { code: 5 };
        assert_eq!(
            err.to_string(),
            "Trivia API returned response code 5 (rate limited)"
        );
    }

    #[tokio::test]
    async fn test_static_source_returns_its_questions() {
        let questions = vec![question("2 + 2?", "4", &["3"])];
        let source = StaticQuestionSource::new(questions.clone());

        assert_eq!(source.fetch_questions().await.unwrap(), questions);
        assert_eq!(source.name(), "static");
    }
}
