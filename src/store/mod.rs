/*!
 * Store module for persistent storage of translation pairs.
 *
 * This module provides SQLite-based persistence with one table per
 * supported target language, each holding (id, source_text, translated_text)
 * rows. Table presence is ensured at process startup.
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::DatabaseConnection;
pub use models::TranslationRecord;
pub use repository::TranslationStore;
