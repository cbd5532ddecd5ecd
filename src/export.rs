use std::path::Path;

use crate::{error::Error, types::OutputRecord, warning};

/// Writes the records to `path` as CSV and returns the number of rows.
///
/// The header comes from [`OutputRecord`]'s field names, so every row
/// shares the first row's columns. Values containing commas, quotes or
/// newlines are quoted by the `csv` writer.
///
/// When `records` is empty nothing is created or touched: a notice is
/// printed and `Ok(0)` returned. Otherwise the whole document is encoded
/// in memory first and lands on disk in a single write, replacing any
/// existing file.
pub async fn save_to_csv(records: &[OutputRecord], path: &Path) -> Result<usize, Error> {
    if records.is_empty() {
        warning!("No records to write.");
        return Ok(0);
    }

    let bytes = encode_csv(records)?;
    async_fs::write(path, bytes)
        .await
        .map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(records.len())
}

fn encode_csv(records: &[OutputRecord]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
}
