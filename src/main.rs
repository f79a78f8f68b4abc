mod config;
mod error;
mod game;
mod models;
mod routes;
mod words;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use config::Config;
use game::CrosswordGenerator;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words::{JsonWordStore, WordRepository};

/// Application state shared across all handlers
pub struct AppState {
    /// Word list backing the crossword
    pub words: Box<dyn WordRepository>,
    pub generator: CrosswordGenerator,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let store = JsonWordStore::new(&config.crossword.words_path);
        tracing::info!("Crossword word list: {}", store.path().display());

        Self {
            words: Box::new(store),
            generator: CrosswordGenerator::new(config.crossword.grid_size),
        }
    }
}

/// Build the full application router
fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "all_hearts_games_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting All Hearts Games backend...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Crossword: http://{}/api/games/crossword", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn test_config(words_path: &std::path::Path) -> Config {
        Config {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            crossword: config::CrosswordConfig {
                words_path: words_path.to_string_lossy().into_owned(),
                grid_size: game::DEFAULT_GRID_SIZE,
            },
        }
    }

    #[tokio::test]
    async fn test_router_serves_file_backed_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(
            &path,
            r#"[{"id": "1", "word": "cat", "clue": "pet"}, {"id": "2", "word": "car", "clue": "drives"}]"#,
        )
        .unwrap();

        let app = build_router(Arc::new(AppState::from_config(&test_config(&path))));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/games/crossword")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let grid: models::CrosswordGrid = serde_json::from_slice(&body).unwrap();
        assert_eq!(grid.words.len(), 2);
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(Arc::new(AppState::from_config(&test_config(
            &dir.path().join("words.json"),
        ))));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
