use crate::display::{format_float, render_table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the bank listing as scraped from the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub name: String,
    pub market_cap_usd: f64,
}

/// A bank row with its market cap converted into GBP, EUR and INR (billions, 2 dp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBankRecord {
    pub name: String,
    pub market_cap_usd: f64,
    pub market_cap_gbp: f64,
    pub market_cap_eur: f64,
    pub market_cap_inr: f64,
}

/// Row shapes that can be rendered and written cell by cell
pub trait TableRow {
    /// Display/serialization form of each cell, in column order
    fn cells(&self) -> Vec<String>;
}

impl TableRow for BankRecord {
    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), format_float(self.market_cap_usd)]
    }
}

impl TableRow for EnrichedBankRecord {
    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_float(self.market_cap_usd),
            format_float(self.market_cap_gbp),
            format_float(self.market_cap_eur),
            format_float(self.market_cap_inr),
        ]
    }
}

/// Ordered rows plus their column labels, in page order.
///
/// Each stage consumes a table and produces a new one; rows are never
/// reordered, added or dropped once extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable<R> {
    columns: Vec<String>,
    rows: Vec<R>,
}

impl<R> ResultTable<R> {
    pub fn new(columns: Vec<String>, rows: Vec<R>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<R>) {
        (self.columns, self.rows)
    }
}

impl<R: TableRow> fmt::Display for ResultTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self.rows.iter().map(TableRow::cells).collect();
        f.write_str(&render_table(&self.columns, &cells))
    }
}

pub type BankTable = ResultTable<BankRecord>;
pub type EnrichedBankTable = ResultTable<EnrichedBankRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enriched_cells_keep_column_order() {
        let row = EnrichedBankRecord {
            name: "Bank A".into(),
            market_cap_usd: 100.0,
            market_cap_gbp: 80.0,
            market_cap_eur: 93.0,
            market_cap_inr: 8295.0,
        };
        assert_eq!(row.cells(), vec!["Bank A", "100.0", "80.0", "93.0", "8295.0"]);
    }

    #[test]
    fn test_display_includes_index_and_headers() {
        let table = BankTable::new(
            vec!["Name".into(), "MC_USD_Billion".into()],
            vec![BankRecord { name: "Bank A".into(), market_cap_usd: 432.92 }],
        );
        let out = table.to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Name") && lines[0].contains("MC_USD_Billion"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].ends_with("432.92"));
    }
}
