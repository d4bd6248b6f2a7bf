use crate::error::Result;
use crate::types::{ResultTable, TableRow};
use std::path::Path;
use tracing::{info, instrument};

/// Writes the table to `path`, replacing any existing file. A leading
/// zero-based index column with an empty header precedes the table's columns.
#[instrument(skip(table), fields(rows = table.len()))]
pub fn load_to_csv<R: TableRow>(table: &ResultTable<R>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let header = std::iter::once("").chain(table.columns().iter().map(String::as_str));
    writer.write_record(header)?;

    for (idx, row) in table.rows().iter().enumerate() {
        let record = std::iter::once(idx.to_string()).chain(row.cells());
        writer.write_record(record)?;
    }

    writer.flush()?;
    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
