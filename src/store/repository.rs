/*!
 * High-level store operations over the per-language tables.
 *
 * This layer owns all SQL and exposes typed operations, keeping the rest of
 * the application free of rusqlite details.
 */

use anyhow::Result;
use rusqlite::params;

use super::connection::DatabaseConnection;
use super::models::TranslationRecord;
use super::schema;
use crate::errors::StoreError;
use crate::language::Language;

/// Store for translation records, one table per supported language
#[derive(Clone)]
pub struct TranslationStore {
    /// Database connection
    db: DatabaseConnection,
}

impl TranslationStore {
    /// Create a new store with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a store with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a store with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Ensure every per-language table exists
    ///
    /// The connection constructors already do this; calling it again is a
    /// no-op by design.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.db.execute_async(|conn| schema::ensure_schema(conn)).await
    }

    /// Insert a translation pair and return its assigned id
    pub async fn insert(
        &self,
        language: Language,
        source_text: &str,
        translated_text: &str,
    ) -> Result<i64, StoreError> {
        let source_text = source_text.to_string();
        let translated_text = translated_text.to_string();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    &format!(
                        "INSERT INTO {} (source_text, translated_text) VALUES (?1, ?2)",
                        language.table_name()
                    ),
                    params![source_text, translated_text],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    /// List all records for a language in insertion order
    pub async fn list_all(&self, language: Language) -> Result<Vec<TranslationRecord>, StoreError> {
        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT id, source_text, translated_text FROM {} ORDER BY id",
                    language.table_name()
                ))?;

                let records = stmt
                    .query_map([], |row| {
                        Ok(TranslationRecord {
                            id: row.get(0)?,
                            source_text: row.get(1)?,
                            translated_text: row.get(2)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(records)
            })
            .await
    }

    /// Delete a record by id
    ///
    /// Deleting an id that does not exist is a silent no-op; absence is not
    /// surfaced as an error.
    pub async fn delete_by_id(&self, language: Language, id: i64) -> Result<(), StoreError> {
        self.db
            .execute_async(move |conn| {
                conn.execute(
                    &format!("DELETE FROM {} WHERE id = ?1", language.table_name()),
                    params![id],
                )?;
                Ok(())
            })
            .await
    }

    /// Count the records stored for a language
    pub async fn count(&self, language: Language) -> Result<i64, StoreError> {
        self.db
            .execute_async(move |conn| {
                let count: i64 = conn.query_row(
                    &format!("SELECT COUNT(*) FROM {}", language.table_name()),
                    [],
                    |row| row.get(0),
                )?;
                Ok(count)
            })
            .await
    }
}
