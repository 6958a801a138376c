/*!
 * Database entity models.
 */

use serde::{Deserialize, Serialize};

/// One stored translation pair
///
/// Records are append-only: created by the orchestrator or the manual add
/// endpoint, removed by explicit delete, never mutated. The id is unique
/// only within its language's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Auto-incremented row id, assigned on insertion
    pub id: i64,
    /// The original-language word or phrase
    pub source_text: String,
    /// The provider's output for one target language
    pub translated_text: String,
}
