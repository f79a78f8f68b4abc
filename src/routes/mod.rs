pub mod crossword;
pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games/crossword", get(crossword::generate_crossword))
        .route(
            "/games/crossword/words",
            get(crossword::list_words)
                .post(crossword::add_word)
                .delete(crossword::delete_word),
        )
}
