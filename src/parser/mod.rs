//! HTML table parsing for the bank listing.
//!
//! The page layout is fixed: the first `<tbody>` holds one `<tr>` per bank,
//! header rows carry only `<th>` cells. The per-row positional contract lives
//! behind [`RowRule`] so it can be tested and swapped on its own.

use crate::error::{EtlError, Result};
use crate::types::BankRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").expect("static selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("static selector"));
static A: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));

/// Turns one data row into a [`BankRecord`].
pub trait RowRule {
    /// `cells` are the row's `<td>` elements in order; `position` is the
    /// 1-based row number within the table body, used in error messages.
    fn extract_row_fields(&self, cells: &[ElementRef<'_>], position: usize) -> Result<BankRecord>;
}

/// Layout of the archived "List of largest banks" page.
///
/// Cell 1 holds a flag link followed by the bank link, whose `title` is the
/// bank name. Cell 2 holds the market cap in US$ billions followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct WikipediaBankRow;

impl WikipediaBankRow {
    const NAME_CELL: usize = 1;
    const NAME_ANCHOR: usize = 1;
    const MARKET_CAP_CELL: usize = 2;
}

impl RowRule for WikipediaBankRow {
    fn extract_row_fields(&self, cells: &[ElementRef<'_>], position: usize) -> Result<BankRecord> {
        let malformed = |reason: String| EtlError::MalformedRow { row: position, reason };

        if cells.len() <= Self::MARKET_CAP_CELL {
            return Err(malformed(format!(
                "expected at least {} cells, found {}",
                Self::MARKET_CAP_CELL + 1,
                cells.len()
            )));
        }

        let name = cells[Self::NAME_CELL]
            .select(&A)
            .nth(Self::NAME_ANCHOR)
            .and_then(|a| a.value().attr("title"))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| malformed("bank link with a title not found".into()))?;

        let raw = cells[Self::MARKET_CAP_CELL]
            .text()
            .next()
            .ok_or_else(|| malformed("market cap cell is empty".into()))?;
        let market_cap_usd = parse_market_cap(raw)
            .ok_or_else(|| malformed(format!("market cap {:?} is not a number", raw)))?;

        Ok(BankRecord {
            name: name.to_string(),
            market_cap_usd,
        })
    }
}

/// Strips the trailing newline/unit characters and thousands separators,
/// then parses a finite, non-negative number.
pub fn parse_market_cap(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parses every data row of the document's first `<tbody>`, in document order.
/// Rows without `<td>` cells are skipped.
///
/// The HTML5 tree builder inserts a `<tbody>` into any `<table>` written
/// without one, so an earlier body-less table on the page becomes the
/// "first tbody" here, where a non-normalizing parser would skip it.
pub fn parse_bank_table(html: &str, rule: &dyn RowRule) -> Result<Vec<BankRecord>> {
    let document = Html::parse_document(html);
    let tbody = document
        .select(&TBODY)
        .next()
        .ok_or_else(|| EtlError::Parse("no table body found in document".into()))?;

    let mut records = Vec::new();
    for (i, row) in tbody.select(&TR).enumerate() {
        let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();
        if cells.is_empty() {
            debug!("Skipping row {} without data cells", i + 1);
            continue;
        }
        records.push(rule.extract_row_fields(&cells, i + 1)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table class="wikitable">
          <tbody>
            <tr><th>Rank</th><th>Bank name</th><th>Market cap<br>(US$ billion)</th></tr>
            <tr>
              <td>1</td>
              <td><span class="flagicon"><a href="/wiki/United_States" title="United States">US</a></span> <a href="/wiki/JPMorgan_Chase" title="JPMorgan Chase">JPMorgan Chase</a></td>
              <td>432.92
</td>
            </tr>
            <tr>
              <td>2</td>
              <td><span class="flagicon"><a href="/wiki/United_States" title="United States">US</a></span> <a href="/wiki/Bank_of_America" title="Bank of America">Bank of America</a></td>
              <td>231.52
</td>
            </tr>
          </tbody>
        </table>
        <table><tbody><tr><td>ignored</td></tr></tbody></table>
        </body></html>
    "#;

    #[test]
    fn test_parse_bank_table_reads_rows_in_order() {
        let records = parse_bank_table(PAGE, &WikipediaBankRow).unwrap();
        assert_eq!(
            records,
            vec![
                BankRecord { name: "JPMorgan Chase".into(), market_cap_usd: 432.92 },
                BankRecord { name: "Bank of America".into(), market_cap_usd: 231.52 },
            ]
        );
    }

    #[test]
    fn test_missing_tbody_is_parse_error() {
        let err = parse_bank_table("<html><body><p>moved</p></body></html>", &WikipediaBankRow)
            .unwrap_err();
        assert!(matches!(err, EtlError::Parse(_)));
    }

    #[test]
    fn test_row_with_single_anchor_is_malformed() {
        let html = r#"<table><tbody>
            <tr><th>Rank</th></tr>
            <tr><td>1</td><td><a title="Only Flag">x</a></td><td>10.0
</td></tr>
        </tbody></table>"#;
        let err = parse_bank_table(html, &WikipediaBankRow).unwrap_err();
        match err {
            EtlError::MalformedRow { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_row_with_too_few_cells_is_malformed() {
        let html = "<table><tbody><tr><td>1</td><td>x</td></tr></tbody></table>";
        let err = parse_bank_table(html, &WikipediaBankRow).unwrap_err();
        match err {
            EtlError::MalformedRow { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_table_without_tbody_gets_one_inserted() {
        let html = r#"<table><tr><td>nav</td></tr></table>
            <table><tbody>
            <tr><td>1</td><td><a title="Flag">f</a><a title="Bank A">A</a></td><td>10.0</td></tr>
            </tbody></table>"#;
        let err = parse_bank_table(html, &WikipediaBankRow).unwrap_err();
        assert!(matches!(err, EtlError::MalformedRow { row: 1, ref reason } if reason.contains("found 1")));
    }

    #[test]
    fn test_static_selectors_match() {
        let doc = Html::parse_fragment("<table><tbody><tr><td><a>x</a></td></tr></tbody></table>");
        for sel in [&*TBODY, &*TR, &*TD, &*A] {
            assert_eq!(doc.select(sel).count(), 1);
        }
    }

    #[test]
    fn test_non_numeric_market_cap_is_malformed() {
        let html = r#"<table><tbody>
            <tr><td>1</td><td><a title="Flag">x</a><a title="Bank A">A</a></td><td>n/a</td></tr>
        </tbody></table>"#;
        let err = parse_bank_table(html, &WikipediaBankRow).unwrap_err();
        assert!(matches!(err, EtlError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_header_only_body_yields_no_rows() {
        let html = "<table><tbody><tr><th>Rank</th><th>Bank name</th></tr></tbody></table>";
        assert!(parse_bank_table(html, &WikipediaBankRow).unwrap().is_empty());
    }

    #[test]
    fn test_parse_market_cap() {
        assert_eq!(parse_market_cap("432.92\n"), Some(432.92));
        assert_eq!(parse_market_cap(" 1,204.5 B"), Some(1204.5));
        assert_eq!(parse_market_cap("-3.0\n"), None);
        assert_eq!(parse_market_cap("\n"), None);
    }
}
