/*!
 * Tests for the HTTP endpoint handlers
 *
 * Handlers are invoked directly with their extractors, backed by an
 * in-memory store and the scripted mock provider.
 */

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use std::sync::Arc;

use palavra::language::Language;
use palavra::server::routes::{self, AddRequest, TranslateRequest};
use palavra::server::AppState;
use palavra::store::TranslationStore;
use palavra::translator::Translator;

use crate::common::MockProvider;

fn create_state(mock: MockProvider) -> Arc<AppState> {
    let store = TranslationStore::new_in_memory().expect("Failed to create in-memory store");
    let translator = Translator::new(Arc::new(mock), store.clone(), "Portuguese");
    Arc::new(AppState { translator, store })
}

/// Test the happy path of POST /translate
#[tokio::test]
async fn test_handleTranslate_withScriptedProvider_shouldReturnMapping() {
    let mock = MockProvider::new()
        .with_response("French", "chat")
        .with_response("Italian", "gatto");
    let state = create_state(mock);

    let request = TranslateRequest {
        source_text: "gato".to_string(),
        target_languages: vec!["french".to_string(), "italian".to_string()],
    };

    let Json(results) = routes::handle_translate(State(state.clone()), Json(request))
        .await
        .expect("Translate request failed");

    assert_eq!(results.len(), 2);
    assert_eq!(results.get(&Language::French).map(String::as_str), Some("chat"));
    assert_eq!(results.get(&Language::Italian).map(String::as_str), Some("gatto"));

    assert_eq!(state.store.count(Language::French).await.unwrap(), 1);
    assert_eq!(state.store.count(Language::Italian).await.unwrap(), 1);
}

/// Test that POST /translate omits failed languages but still succeeds
#[tokio::test]
async fn test_handleTranslate_withFailingLanguage_shouldOmitItFromMapping() {
    let mock = MockProvider::new()
        .with_response("French", "chat")
        .with_failure("Chinese");
    let state = create_state(mock);

    let request = TranslateRequest {
        source_text: "cat".to_string(),
        target_languages: vec!["french".to_string(), "chinese".to_string()],
    };

    let Json(results) = routes::handle_translate(State(state.clone()), Json(request))
        .await
        .expect("Translate request failed");

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&Language::French));
    assert_eq!(state.store.count(Language::Chinese).await.unwrap(), 0);
}

/// Test that POST /translate rejects an empty body
#[tokio::test]
async fn test_handleTranslate_withMissingFields_shouldReturn400() {
    let state = create_state(MockProvider::new());

    let request = TranslateRequest {
        source_text: String::new(),
        target_languages: vec!["french".to_string()],
    };
    let (status, _) = routes::handle_translate(State(state.clone()), Json(request))
        .await
        .err()
        .expect("Expected an error");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = TranslateRequest {
        source_text: "gato".to_string(),
        target_languages: vec![],
    };
    let (status, _) = routes::handle_translate(State(state), Json(request))
        .await
        .err()
        .expect("Expected an error");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test that an unsupported language in the list rejects the whole request
/// before any provider call
#[tokio::test]
async fn test_handleTranslate_withUnsupportedLanguage_shouldReturn400BeforeProviderCall() {
    let mock = MockProvider::new().with_response("French", "chat");
    let tracker = mock.tracker();
    let state = create_state(mock);

    let request = TranslateRequest {
        source_text: "gato".to_string(),
        target_languages: vec!["french".to_string(), "klingon".to_string()],
    };

    let (status, _) = routes::handle_translate(State(state), Json(request))
        .await
        .err()
        .expect("Expected an error");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

/// Test the manual add endpoint
#[tokio::test]
async fn test_handleAdd_withValidInput_shouldInsertWithoutProviderCall() {
    let mock = MockProvider::new();
    let tracker = mock.tracker();
    let state = create_state(mock);

    let request = AddRequest {
        language: "spanish".to_string(),
        source_text: "obrigado".to_string(),
        translated_text: "gracias".to_string(),
    };

    let Json(record) = routes::handle_add(State(state.clone()), Json(request))
        .await
        .expect("Add request failed");

    assert!(record.id > 0);
    assert_eq!(record.source_text, "obrigado");
    assert_eq!(record.translated_text, "gracias");
    assert_eq!(tracker.lock().unwrap().call_count, 0);
    assert_eq!(state.store.count(Language::Spanish).await.unwrap(), 1);
}

/// Test add validation errors
#[tokio::test]
async fn test_handleAdd_withBadInput_shouldReturn400() {
    let state = create_state(MockProvider::new());

    let request = AddRequest {
        language: "klingon".to_string(),
        source_text: "obrigado".to_string(),
        translated_text: "qatlho'".to_string(),
    };
    let (status, _) = routes::handle_add(State(state.clone()), Json(request))
        .await
        .err()
        .expect("Expected an error");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = AddRequest {
        language: "spanish".to_string(),
        source_text: String::new(),
        translated_text: "gracias".to_string(),
    };
    let (status, _) = routes::handle_add(State(state), Json(request))
        .await
        .err()
        .expect("Expected an error");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test the list endpoint
#[tokio::test]
async fn test_handleList_shouldReturnStoredRecords() {
    let state = create_state(MockProvider::new());

    let Json(records) = routes::handle_list(State(state.clone()), Path("french".to_string()))
        .await
        .expect("List request failed");
    assert!(records.is_empty());

    state
        .store
        .insert(Language::French, "gato", "chat")
        .await
        .unwrap();

    let Json(records) = routes::handle_list(State(state), Path("french".to_string()))
        .await
        .expect("List request failed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_text, "gato");
}

/// Test list with an unsupported language
#[tokio::test]
async fn test_handleList_withUnsupportedLanguage_shouldReturn400() {
    let state = create_state(MockProvider::new());

    let (status, Json(body)) = routes::handle_list(State(state), Path("klingon".to_string()))
        .await
        .err()
        .expect("Expected an error");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.contains("klingon"));
}

/// Test the delete endpoint, including the missing-id no-op
#[tokio::test]
async fn test_handleDelete_shouldSucceedEvenForMissingIds() {
    let state = create_state(MockProvider::new());

    let id = state
        .store
        .insert(Language::Italian, "gato", "gatto")
        .await
        .unwrap();

    let Json(response) = routes::handle_delete(
        State(state.clone()),
        Path(("italian".to_string(), id)),
    )
    .await
    .expect("Delete request failed");
    assert!(response.success);

    // Deleting the same id again reports success, not an error
    let Json(response) = routes::handle_delete(
        State(state.clone()),
        Path(("italian".to_string(), id)),
    )
    .await
    .expect("Delete of missing id failed");
    assert!(response.success);

    assert_eq!(state.store.count(Language::Italian).await.unwrap(), 0);
}

/// Test delete with an unsupported language
#[tokio::test]
async fn test_handleDelete_withUnsupportedLanguage_shouldReturn400() {
    let state = create_state(MockProvider::new());

    let (status, _) = routes::handle_delete(State(state), Path(("klingon".to_string(), 1)))
        .await
        .err()
        .expect("Expected an error");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test the CSV export endpoint body and headers
#[tokio::test]
async fn test_handleExport_shouldReturnCsvAttachment() {
    let state = create_state(MockProvider::new());

    state
        .store
        .insert(Language::French, "gato", "chat")
        .await
        .unwrap();

    let response = routes::handle_export(State(state), Path("french".to_string()))
        .await
        .expect("Export request failed");

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=french.csv"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(body[3..].to_vec()).unwrap();
    assert_eq!(text, "sourceText,translatedText\ngato,chat\n");
}

/// Test that exporting an empty language yields only the BOM and header
#[tokio::test]
async fn test_handleExport_withNoRows_shouldReturnBomAndHeaderOnly() {
    let state = create_state(MockProvider::new());

    let response = routes::handle_export(State(state), Path("chinese".to_string()))
        .await
        .expect("Export request failed");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(body[3..].to_vec()).unwrap();
    assert_eq!(text, "sourceText,translatedText\n");
}

/// Test export with an unsupported language
#[tokio::test]
async fn test_handleExport_withUnsupportedLanguage_shouldReturn400() {
    let state = create_state(MockProvider::new());

    let result = routes::handle_export(State(state), Path("klingon".to_string())).await;

    let (status, _) = result.err().expect("Expected an error");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test the stats endpoint
#[tokio::test]
async fn test_handleStats_shouldReportPerLanguageCounts() {
    let state = create_state(MockProvider::new());

    state
        .store
        .insert(Language::French, "gato", "chat")
        .await
        .unwrap();
    state
        .store
        .insert(Language::French, "cão", "chien")
        .await
        .unwrap();

    let Json(counts) = routes::handle_stats(State(state))
        .await
        .expect("Stats request failed");

    assert_eq!(counts.get(&Language::French), Some(&2));
    assert_eq!(counts.get(&Language::Chinese), Some(&0));
    assert_eq!(counts.len(), Language::ALL.len());
}
