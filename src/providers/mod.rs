/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for various LLM providers:
 * - OpenAI: OpenAI API integration (default)
 * - Anthropic: Anthropic API integration
 * - Ollama: Local LLM server
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use crate::app_config::{ProviderConfig, ProviderKind};
use crate::errors::{AppError, ProviderError};

/// Common trait for all LLM providers
///
/// The orchestrator only ever needs one capability: hand the provider a
/// finished instruction string and get the generated text back. Keeping the
/// trait this narrow makes every client interchangeable, including the
/// scripted test double used in the test suite.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Complete a translation instruction and return the raw generated text
    ///
    /// # Arguments
    /// * `prompt` - The full instruction, already parameterized with the
    ///   source text and target language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated text, untrimmed
    async fn translate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Lowercase provider identifier, for logging
    fn name(&self) -> &'static str;
}

/// Build the configured provider client
///
/// Constructed once at startup and shared across requests.
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn TranslationProvider>, AppError> {
    let api_key = config.resolve_api_key();

    if config.kind.requires_api_key() && api_key.is_empty() {
        return Err(AppError::Config(format!(
            "API key is required for {} provider",
            config.kind.display_name()
        )));
    }

    let provider: Arc<dyn TranslationProvider> = match config.kind {
        ProviderKind::OpenAI => Arc::new(openai::OpenAI::new(
            api_key,
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout_secs,
        )),
        ProviderKind::Anthropic => Arc::new(anthropic::Anthropic::new(
            api_key,
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout_secs,
        )),
        ProviderKind::Ollama => Arc::new(ollama::Ollama::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout_secs,
        )),
    };

    Ok(provider)
}

pub mod anthropic;
pub mod ollama;
pub mod openai;
