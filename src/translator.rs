/*!
 * Core translation orchestration.
 *
 * This module contains the Translator, which fans a single source phrase out
 * to one provider call per requested target language, persists each success,
 * and assembles a partial result map. A failure for one language never
 * aborts the remaining languages.
 */

use log::{debug, error};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::AppError;
use crate::language::Language;
use crate::providers::TranslationProvider;
use crate::store::TranslationStore;

/// Orchestrates provider calls and persistence for translation requests
#[derive(Clone)]
pub struct Translator {
    /// Provider client, constructed once at startup and shared
    provider: Arc<dyn TranslationProvider>,
    /// Store for persisting successful translations
    store: TranslationStore,
    /// Human-readable name of the language translations start from
    source_language: String,
}

impl Translator {
    /// Create a new translator
    pub fn new(
        provider: Arc<dyn TranslationProvider>,
        store: TranslationStore,
        source_language: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            store,
            source_language: source_language.into(),
        }
    }

    /// Build the instruction prompt for one target language
    ///
    /// The wording asks for the bare translation with everyday-equivalent
    /// phrasing for idioms. Chinese additionally gets a hanzi rendering with
    /// the pinyin in parentheses; that is purely a prompt-construction rule,
    /// the provider is not aware of it.
    pub fn build_prompt(&self, source_text: &str, target: Language) -> String {
        let mut prompt = format!(
            "Translate the word or phrase '{}' from {} to {}. \
             Reply with the translation only, without explanations, without a trailing period, \
             and without a leading capital letter. If it is an everyday phrase or expression, \
             translate it to a natural, commonly used equivalent.",
            source_text,
            self.source_language,
            target.display_name()
        );

        if target.wants_transliteration() {
            prompt.push_str(
                " Write the translation in hanzi followed by the pinyin in parentheses, \
                 e.g. '猫 (māo)'.",
            );
        }

        prompt
    }

    /// Translate a source phrase into every requested language and persist
    /// each success
    ///
    /// Languages are attempted sequentially, in the order given. A provider
    /// or storage failure for one language is logged and that language is
    /// omitted from the result; processing continues with the next one. The
    /// call as a whole only fails on precondition violations, before any
    /// provider call is made.
    pub async fn translate_and_store(
        &self,
        source_text: &str,
        target_languages: &[Language],
    ) -> Result<BTreeMap<Language, String>, AppError> {
        if source_text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Source text must not be empty".to_string(),
            ));
        }

        if target_languages.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one target language is required".to_string(),
            ));
        }

        let mut results = BTreeMap::new();

        for &language in target_languages {
            let prompt = self.build_prompt(source_text, language);
            debug!("Requesting {} translation from {}", language, self.provider.name());

            let translated = match self.provider.translate(&prompt).await {
                Ok(text) => text.trim().to_string(),
                Err(e) => {
                    error!("Failed to translate '{}' to {}: {}", source_text, language, e);
                    continue;
                }
            };

            if let Err(e) = self.store.insert(language, source_text, &translated).await {
                error!(
                    "Failed to store {} translation of '{}': {}",
                    language, source_text, e
                );
                continue;
            }

            results.insert(language, translated);
        }

        Ok(results)
    }
}
