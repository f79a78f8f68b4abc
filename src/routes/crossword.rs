use crate::{
    error::ApiError,
    models::{CrosswordGrid, WordEntry},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

const NO_WORDS: &str = "No words available. Please add words in the admin panel.";
const GENERATE_FAILED: &str = "Failed to generate crossword";
const WORD_AND_CLUE_REQUIRED: &str = "Word and clue are required";

#[derive(Debug, Deserialize)]
pub struct AddWordRequest {
    pub word: Option<String>,
    pub clue: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteWordQuery {
    pub id: Option<String>,
}

/// Generate a fresh crossword from the current word list
pub async fn generate_crossword(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CrosswordGrid>, ApiError> {
    let words = state.words.list().await.map_err(|e| {
        tracing::error!("Failed to load crossword words: {}", e);
        ApiError::Internal(GENERATE_FAILED)
    })?;

    if words.is_empty() {
        tracing::warn!("Crossword requested but the word list is empty");
        return Err(ApiError::NotFound(NO_WORDS));
    }

    let crossword = state.generator.generate(&words).ok_or_else(|| {
        tracing::error!("Generator returned no grid for {} words", words.len());
        ApiError::Internal(GENERATE_FAILED)
    })?;

    tracing::info!(
        "Generated crossword: {} of {} words placed ({}x{})",
        crossword.words.len(),
        words.len(),
        crossword.width,
        crossword.height
    );

    Ok(Json(crossword))
}

/// List every word in the word list
pub async fn list_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WordEntry>>, ApiError> {
    let words = state.words.list().await.map_err(|e| {
        tracing::error!("Failed to fetch words: {}", e);
        ApiError::Internal("Failed to fetch words")
    })?;

    Ok(Json(words))
}

/// Add a word and its clue to the word list
pub async fn add_word(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddWordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WordEntry>), ApiError> {
    // Unreadable bodies carry no usable word or clue
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected add word body: {}", rejection.body_text());
        ApiError::BadRequest(WORD_AND_CLUE_REQUIRED)
    })?;

    let (word, clue) = match (payload.word, payload.clue) {
        (Some(word), Some(clue)) if !word.trim().is_empty() && !clue.trim().is_empty() => {
            (word, clue)
        }
        _ => return Err(ApiError::BadRequest(WORD_AND_CLUE_REQUIRED)),
    };

    let entry = WordEntry {
        created_at: Some(chrono::Utc::now()),
        ..WordEntry::new(Uuid::new_v4().to_string(), word.to_lowercase(), clue)
    };

    let entry = state.words.add(entry).await.map_err(|e| {
        tracing::error!("Failed to add word: {}", e);
        ApiError::Internal("Failed to add word")
    })?;

    tracing::info!("Added crossword word '{}' ({})", entry.text, entry.id);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Remove a word from the word list by id
pub async fn delete_word(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeleteWordQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::BadRequest("ID is required"))?;

    state.words.delete(&id).await.map_err(|e| {
        tracing::error!("Failed to delete word {}: {}", id, e);
        ApiError::Internal("Failed to delete word")
    })?;

    tracing::info!("Deleted crossword word {}", id);
    Ok(Json(json!({ "success": true })))
}
