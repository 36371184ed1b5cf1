//! Process configuration loaded from environment variables

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_TRIVIA_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_TRIVIA_AMOUNT: u32 = 5;
pub const DEFAULT_TRIVIA_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the trivia question source
#[derive(Debug, Clone, PartialEq)]
pub struct TriviaConfig {
    /// Endpoint queried with `amount` and `type=multiple`
    pub api_url: String,
    /// Questions requested per game
    pub amount: u32,
    /// Upper bound on a single fetch
    pub timeout: Duration,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_TRIVIA_API_URL.to_string(),
            amount: DEFAULT_TRIVIA_AMOUNT,
            timeout: DEFAULT_TRIVIA_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub trivia: TriviaConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            trivia: TriviaConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let port = env_parsed("PORT").unwrap_or(DEFAULT_PORT);

        let api_url = env_trimmed("TRIVIA_API_URL")
            .unwrap_or_else(|| DEFAULT_TRIVIA_API_URL.to_string());

        let amount = env_parsed("TRIVIA_AMOUNT")
            .filter(|n: &u32| {
                if *n == 0 {
                    tracing::warn!("TRIVIA_AMOUNT must be positive, using default");
                }
                *n > 0
            })
            .unwrap_or(DEFAULT_TRIVIA_AMOUNT);

        let timeout = env_parsed("TRIVIA_TIMEOUT_SECS")
            .filter(|secs: &u64| {
                if *secs == 0 {
                    tracing::warn!("TRIVIA_TIMEOUT_SECS must be positive, using default");
                }
                *secs > 0
            })
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TRIVIA_TIMEOUT);

        Self {
            port,
            trivia: TriviaConfig {
                api_url,
                amount,
                timeout,
            },
        }
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = env_trimmed(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparseable {}={:?}, using default", key, raw);
            None
        }
    }
}
