//! HTTP endpoints and router assembly.
//!
//! The JSON endpoints are read-only and never expose prompt text or the
//! impostor; everything interactive goes through the WebSocket.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;
use crate::types::{DrawPolicy, SessionSnapshot};
use crate::ws;

/// Theme names in the loaded phrase book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhrasesResponse {
    pub count: usize,
    pub themes: Vec<String>,
    pub draw_policy: DrawPolicy,
}

/// GET /api/session
pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.snapshot().await)
}

/// GET /api/phrases
pub async fn get_phrases(State(state): State<Arc<AppState>>) -> Json<PhrasesResponse> {
    let session = state.session.read().await;
    let themes = session.book().themes();
    Json(PhrasesResponse {
        count: themes.len(),
        themes,
        draw_policy: session.policy(),
    })
}

/// Full application router
pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/api/session", get(get_session))
        .route("/api/phrases", get(get_phrases))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::PhraseBook;
    use crate::session::GameSession;
    use crate::types::GamePhase;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tower::ServiceExt;

    fn app() -> (Arc<AppState>, Router) {
        let state = Arc::new(AppState::new(GameSession::new(
            PhraseBook::builtin().unwrap(),
            DrawPolicy::Uniform,
            3,
            StdRng::seed_from_u64(21),
        )));
        let dir = tempfile::tempdir().unwrap();
        (state.clone(), router(state, dir.path()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> T {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_phrases() {
        let (_state, app) = app();
        let phrases: PhrasesResponse = get_json(app, "/api/phrases").await;
        assert_eq!(phrases.count, 12);
        assert_eq!(phrases.themes[0], "Loteria");
        assert_eq!(phrases.draw_policy, DrawPolicy::Uniform);
    }

    #[tokio::test]
    async fn test_get_session_snapshot() {
        let (state, app) = app();
        for name in ["A", "B", "C"] {
            state.add_player(name).await.unwrap();
        }
        state.start_game().await.unwrap();

        let snap: SessionSnapshot = get_json(app, "/api/session").await;
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.players.len(), 3);
        assert_eq!(snap.round_no, 1);
        assert_eq!(snap.turn_order.len(), 3);
    }
}
