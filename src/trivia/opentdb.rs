use super::*;
use serde::Deserialize;

use crate::config::TriviaConfig;

/// Open Trivia DB client (https://opentdb.com)
pub struct OpenTdbClient {
    api_url: String,
    amount: u32,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenTdbClient {
    pub fn new(config: TriviaConfig) -> TriviaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TriviaError::Config(e.to_string()))?;

        Ok(Self {
            api_url: config.api_url,
            amount: config.amount,
            timeout: config.timeout,
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OpenTdbResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<Question>,
}

impl OpenTdbResponse {
    fn into_questions(self) -> TriviaResult<Vec<Question>> {
        if self.response_code != 0 {
            return Err(TriviaError::Api {
                code: self.response_code,
            });
        }
        Ok(self.results)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch_questions(&self) -> TriviaResult<Vec<Question>> {
        let amount = self.amount.to_string();
        let request = self
            .client
            .get(&self.api_url)
            .query(&[("amount", amount.as_str()), ("type", "multiple")]);

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| TriviaError::Timeout(self.timeout))?
            .map_err(|e| {
                if e.is_timeout() {
                    TriviaError::Timeout(self.timeout)
                } else {
                    TriviaError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TriviaError::Status(response.status().as_u16()));
        }

        let body: OpenTdbResponse = response
            .json()
            .await
            .map_err(|e| TriviaError::Parse(e.to_string()))?;

        let questions = body.into_questions()?;
        tracing::debug!(
            "Open Trivia DB returned {} questions ({})",
            questions.len(),
            questions
                .iter()
                .map(|q| q.category.as_deref().unwrap_or("uncategorized"))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(questions)
    }

    fn name(&self) -> &str {
        "opentdb"
    }
}
