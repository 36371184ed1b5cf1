//! HTTP routes
//!
//! The WebSocket endpoint plus two read-only JSON status endpoints.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::types::{GameStatus, Roster};
use crate::ws;

/// Build the full application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/api/players", get(get_players))
        .route("/api/game", get(get_game_status))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Current roster, same shape as the `players-updated` payload.
///
/// GET /api/players
pub async fn get_players(State(state): State<Arc<AppState>>) -> Json<Roster> {
    Json(state.roster().await)
}

/// Phase and progress of the running game.
///
/// GET /api/game
pub async fn get_game_status(State(state): State<Arc<AppState>>) -> Json<GameStatus> {
    Json(state.status().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::StaticQuestionSource;
    use crate::types::{GamePhase, Question};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let questions = vec![Question::new(
            "2 + 2?",
            "4",
            vec!["3".to_string(), "5".to_string(), "22".to_string()],
        )];
        Arc::new(AppState::new(Arc::new(StaticQuestionSource::new(
            questions,
        ))))
    }

    async fn get_json(app: Router, uri: &str) -> serde_json::Value {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_players_endpoint() {
        let state = test_state();
        state.join(&"01A".to_string(), "Alice".to_string()).await;

        let body = get_json(router(state), "/api/players").await;
        assert_eq!(body, serde_json::json!({ "01A": { "name": "Alice", "score": 0 } }));
    }

    #[tokio::test]
    async fn test_game_status_endpoint() {
        let state = test_state();
        state.start_game().await.unwrap();

        let body = get_json(router(state), "/api/game").await;
        let status: GameStatus = serde_json::from_value(body).unwrap();
        assert_eq!(status.phase, GamePhase::InProgress);
        assert_eq!(status.question_index, 1);
        assert_eq!(status.question_count, 1);
        assert_eq!(status.player_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = router(test_state())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
