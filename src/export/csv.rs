//! CSV出力

use super::ensure_parent;
use crate::catalog::{MatchRecord, OUTPUT_COLUMNS};
use crate::error::Result;
use std::path::Path;

/// ヘッダー行は0件でも必ず書く
pub fn write_csv(records: &[MatchRecord], output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::debug!(path = %output_path.display(), rows = records.len(), "CSVを書き出し");
    Ok(())
}
