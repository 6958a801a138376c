/*!
 * Tests for the translation orchestrator
 */

use std::sync::Arc;

use palavra::errors::AppError;
use palavra::language::Language;
use palavra::store::TranslationStore;
use palavra::translator::Translator;

use crate::common::MockProvider;

fn create_translator(mock: MockProvider) -> (Translator, TranslationStore) {
    let store = TranslationStore::new_in_memory().expect("Failed to create in-memory store");
    let translator = Translator::new(Arc::new(mock), store.clone(), "Portuguese");
    (translator, store)
}

/// Test the partial-failure contract: one language failing must not
/// prevent the others from succeeding and being persisted
#[tokio::test]
async fn test_translateAndStore_withOneFailingLanguage_shouldReturnPartialResults() {
    let mock = MockProvider::new()
        .with_response("French", "chat")
        .with_failure("Chinese");
    let (translator, store) = create_translator(mock);

    let results = translator
        .translate_and_store("cat", &[Language::French, Language::Chinese])
        .await
        .expect("Overall operation must not fail");

    assert_eq!(results.len(), 1);
    assert_eq!(results.get(&Language::French).map(String::as_str), Some("chat"));
    assert!(!results.contains_key(&Language::Chinese));

    assert_eq!(store.count(Language::French).await.unwrap(), 1);
    assert_eq!(store.count(Language::Chinese).await.unwrap(), 0);
}

/// Test that all languages are attempted even when an early one fails
#[tokio::test]
async fn test_translateAndStore_withEarlyFailure_shouldStillAttemptRemaining() {
    let mock = MockProvider::new()
        .with_failure("English")
        .with_response("French", "chat")
        .with_response("Italian", "gatto");
    let (translator, store) = create_translator(mock);

    let results = translator
        .translate_and_store(
            "gato",
            &[Language::English, Language::French, Language::Italian],
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(store.count(Language::English).await.unwrap(), 0);
    assert_eq!(store.count(Language::French).await.unwrap(), 1);
    assert_eq!(store.count(Language::Italian).await.unwrap(), 1);
}

/// Test that an empty target set fails before any provider call
#[tokio::test]
async fn test_translateAndStore_withEmptyTargets_shouldFailBeforeProviderCall() {
    let mock = MockProvider::new().with_response("French", "chat");
    let tracker = mock.tracker();
    let (translator, _store) = create_translator(mock);

    let result = translator.translate_and_store("cat", &[]).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

/// Test that blank source text fails before any provider call
#[tokio::test]
async fn test_translateAndStore_withBlankSourceText_shouldFailBeforeProviderCall() {
    let mock = MockProvider::new().with_response("French", "chat");
    let tracker = mock.tracker();
    let (translator, _store) = create_translator(mock);

    let result = translator.translate_and_store("   ", &[Language::French]).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

/// Test that provider output is trimmed before persistence and response
#[tokio::test]
async fn test_translateAndStore_withUntrimmedOutput_shouldTrimBeforeStoring() {
    let mock = MockProvider::new().with_response("French", "  chat \n");
    let (translator, store) = create_translator(mock);

    let results = translator
        .translate_and_store("cat", &[Language::French])
        .await
        .unwrap();

    assert_eq!(results.get(&Language::French).map(String::as_str), Some("chat"));

    let records = store.list_all(Language::French).await.unwrap();
    assert_eq!(records[0].translated_text, "chat");
}

/// Test that one provider call is made per requested language
#[tokio::test]
async fn test_translateAndStore_shouldMakeOneCallPerLanguage() {
    let mock = MockProvider::new()
        .with_response("French", "chat")
        .with_response("Spanish", "gato");
    let tracker = mock.tracker();
    let (translator, _store) = create_translator(mock);

    translator
        .translate_and_store("cat", &[Language::French, Language::Spanish])
        .await
        .unwrap();

    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 2);
    assert!(tracker.prompts[0].contains("French"));
    assert!(tracker.prompts[1].contains("Spanish"));
}

/// Test the prompt wording for regular languages
#[test]
fn test_buildPrompt_withRegularLanguage_shouldNameSourceAndTarget() {
    let (translator, _store) = create_translator(MockProvider::new());

    let prompt = translator.build_prompt("bom dia", Language::French);

    assert!(prompt.contains("'bom dia'"));
    assert!(prompt.contains("from Portuguese to French"));
    assert!(!prompt.contains("pinyin"));
}

/// Test the logographic + phonetic prompt special case
#[test]
fn test_buildPrompt_withChinese_shouldRequestHanziAndPinyin() {
    let (translator, _store) = create_translator(MockProvider::new());

    let prompt = translator.build_prompt("gato", Language::Chinese);

    assert!(prompt.contains("hanzi"));
    assert!(prompt.contains("pinyin"));
    assert!(prompt.contains("parentheses"));
}
