// Public API for integration tests and potential library usage

pub mod api;
pub mod config;
pub mod protocol;
pub mod state;
pub mod trivia;
pub mod types;
pub mod ws;
