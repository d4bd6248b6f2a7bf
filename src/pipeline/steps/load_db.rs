use crate::error::{EtlError, Result};
use crate::types::EnrichedBankTable;
use rusqlite::{params, Connection};
use tracing::{info, instrument};

/// Quotes an SQLite identifier.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Replaces `table_name` with the table's contents: drop, create (`TEXT`
/// name, `REAL` market caps), then insert every row in order. The whole
/// replacement runs in one transaction.
#[instrument(skip(table, conn), fields(rows = table.len()))]
pub fn load_to_db(table: &EnrichedBankTable, conn: &mut Connection, table_name: &str) -> Result<()> {
    let columns = table.columns();
    if columns.len() != 5 {
        return Err(EtlError::Schema(format!(
            "expected 5 columns for the database table, found {}",
            columns.len()
        )));
    }

    let ident = quote_ident(table_name);
    let column_defs = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} {}", quote_ident(c), if i == 0 { "TEXT" } else { "REAL" }))
        .collect::<Vec<_>>()
        .join(", ");
    let column_list = columns.iter().map(|c| quote_ident(c)).collect::<Vec<_>>().join(", ");

    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {ident};\nCREATE TABLE {ident} ({column_defs});"
    ))?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {ident} ({column_list}) VALUES (?1, ?2, ?3, ?4, ?5)"
        ))?;
        for row in table.rows() {
            stmt.execute(params![
                row.name,
                row.market_cap_usd,
                row.market_cap_gbp,
                row.market_cap_eur,
                row.market_cap_inr,
            ])?;
        }
    }
    tx.commit()?;

    info!("Loaded {} rows into {}", table.len(), table_name);
    Ok(())
}
