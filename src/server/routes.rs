use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::AppError;
use crate::language::Language;
use crate::server::{csv_export, AppState};
use crate::store::TranslationRecord;

/// Error body returned by every endpoint
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateRequest {
    pub source_text: String,
    pub target_languages: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRequest {
    pub language: String,
    pub source_text: String,
    pub translated_text: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn internal_error(message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Parse a wire language identifier, rejecting anything outside the
/// supported set before the store is touched
fn parse_language(s: &str) -> Result<Language, ApiError> {
    s.parse().map_err(|e: anyhow::Error| bad_request(e.to_string()))
}

fn map_app_error(e: AppError) -> ApiError {
    match e {
        AppError::InvalidInput(message) => bad_request(message),
        other => internal_error(other.to_string()),
    }
}

/// POST /translate
pub async fn handle_translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<BTreeMap<Language, String>>, ApiError> {
    if payload.source_text.trim().is_empty() {
        return Err(bad_request("sourceText must not be empty"));
    }

    if payload.target_languages.is_empty() {
        return Err(bad_request("targetLanguages must not be empty"));
    }

    let languages = payload
        .target_languages
        .iter()
        .map(|s| parse_language(s))
        .collect::<Result<Vec<_>, _>>()?;

    let results = state
        .translator
        .translate_and_store(&payload.source_text, &languages)
        .await
        .map_err(map_app_error)?;

    Ok(Json(results))
}

/// POST /add
pub async fn handle_add(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddRequest>,
) -> Result<Json<TranslationRecord>, ApiError> {
    if payload.source_text.trim().is_empty() || payload.translated_text.trim().is_empty() {
        return Err(bad_request("sourceText and translatedText are required"));
    }

    let language = parse_language(&payload.language)?;

    let id = state
        .store
        .insert(language, &payload.source_text, &payload.translated_text)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(TranslationRecord {
        id,
        source_text: payload.source_text,
        translated_text: payload.translated_text,
    }))
}

/// GET /translations/{language}
pub async fn handle_list(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> Result<Json<Vec<TranslationRecord>>, ApiError> {
    let language = parse_language(&language)?;

    let records = state
        .store
        .list_all(language)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(records))
}

/// DELETE /translations/{language}/{id}
///
/// Succeeds even when the id does not exist; absence is not a distinct
/// error condition.
pub async fn handle_delete(
    State(state): State<Arc<AppState>>,
    Path((language, id)): Path<(String, i64)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let language = parse_language(&language)?;

    state
        .store
        .delete_by_id(language, id)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(DeleteResponse { success: true }))
}

/// GET /export/{language}
pub async fn handle_export(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> Result<Response, ApiError> {
    let language = parse_language(&language)?;

    let records = state
        .store
        .list_all(language)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    let body = csv_export::render(&records).map_err(|e| internal_error(e.to_string()))?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}.csv", language),
        ),
    ];

    Ok((headers, body).into_response())
}

/// GET /stats
pub async fn handle_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<Language, i64>>, ApiError> {
    let mut counts = BTreeMap::new();

    for language in Language::ALL {
        let count = state
            .store
            .count(language)
            .await
            .map_err(|e| internal_error(e.to_string()))?;
        counts.insert(language, count);
    }

    Ok(Json(counts))
}
