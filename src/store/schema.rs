/*!
 * Database schema definitions.
 *
 * One table per supported target language, created if absent. There is no
 * versioning or migration machinery; create-if-absent is the whole contract.
 */

use log::debug;
use rusqlite::Connection;

use crate::errors::StoreError;
use crate::language::Language;

/// Ensure every per-language table exists
///
/// Idempotent; safe to call at every process startup. Table names come from
/// the Language enum's static mapping, never from request input.
pub fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    // WAL mode for better concurrency between readers and writers
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    for language in Language::ALL {
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL
            );
            "#,
            language.table_name()
        ))?;
        debug!("Ensured table for language: {}", language);
    }

    Ok(())
}
