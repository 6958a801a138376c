/*!
 * # Palavra
 *
 * A Rust HTTP service for building a personal vocabulary notebook with AI.
 *
 * ## Features
 *
 * - Translate a word or phrase into several target languages in one request
 * - Translations produced by configurable LLM providers:
 *   - OpenAI API
 *   - Anthropic API
 *   - Ollama (local LLM)
 * - Every translation persisted in a per-language SQLite table
 * - CRUD endpoints plus CSV export per language
 * - Partial-failure isolation: one language failing never aborts the rest
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language`: The closed set of supported target languages
 * - `providers`: Client implementations for the LLM providers
 * - `store`: SQLite persistence, one table per language
 * - `translator`: Orchestration of provider calls and persistence
 * - `server`: HTTP surface (axum routes and CSV export)
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language;
pub mod providers;
pub mod server;
pub mod store;
pub mod translator;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, StoreError};
pub use language::Language;
pub use store::{TranslationRecord, TranslationStore};
pub use translator::Translator;
