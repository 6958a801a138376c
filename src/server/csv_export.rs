/*!
 * CSV rendering for the export endpoint.
 */

use anyhow::{Context, Result};

use crate::store::TranslationRecord;

/// UTF-8 byte-order mark, prefixed so spreadsheet tools detect the encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column header row, matching the wire field names
const HEADER: [&str; 2] = ["sourceText", "translatedText"];

/// Render records as CSV: BOM, header row, one line per record
pub fn render(records: &[TranslationRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::from(UTF8_BOM);

    {
        let mut writer = csv::Writer::from_writer(&mut buf);

        writer
            .write_record(HEADER)
            .context("Failed to write CSV header")?;

        for record in records {
            writer
                .write_record([
                    record.source_text.as_str(),
                    record.translated_text.as_str(),
                ])
                .context("Failed to write CSV record")?;
        }

        writer.flush().context("Failed to finish CSV output")?;
    }

    Ok(buf)
}
