use crate::app::ports::HttpClientPort;
use crate::error::{EtlError, Result};
use crate::parser::{parse_bank_table, RowRule};
use crate::types::BankTable;
use tracing::{info, instrument, warn};

/// Fetches `url` and parses the first table body into (name, market cap USD) rows.
///
/// `expected_columns` labels the two extracted fields, name first.
#[instrument(skip(http, rule, expected_columns))]
pub fn extract(
    http: &dyn HttpClientPort,
    rule: &dyn RowRule,
    url: &str,
    expected_columns: &[&str],
) -> Result<BankTable> {
    if expected_columns.len() != 2 {
        return Err(EtlError::Schema(format!(
            "extractor produces 2 columns, {} labels given: {:?}",
            expected_columns.len(),
            expected_columns
        )));
    }

    let response = http.get(url)?;
    if !response.is_success() {
        return Err(EtlError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let rows = parse_bank_table(&response.body, rule)?;
    info!("Extracted {} rows", rows.len());
    if rows.is_empty() {
        warn!("No bank rows found - the page structure may have changed");
    }

    let columns = expected_columns.iter().map(|c| c.to_string()).collect();
    Ok(BankTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HttpGetResult;
    use crate::constants::TABLE_ATTRIBS;
    use crate::parser::WikipediaBankRow;

    struct StaticPage {
        status: u16,
        body: &'static str,
    }

    impl HttpClientPort for StaticPage {
        fn get(&self, _url: &str) -> std::result::Result<HttpGetResult, reqwest::Error> {
            Ok(HttpGetResult {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    const PAGE: &str = r#"<table><tbody>
        <tr><th>Rank</th><th>Bank name</th><th>Market cap</th></tr>
        <tr><td>1</td><td><a title="UK">f</a> <a title="HSBC">HSBC</a></td><td>160.68
</td></tr>
    </tbody></table>"#;

    #[test]
    fn test_extract_labels_columns() {
        let http = StaticPage { status: 200, body: PAGE };
        let table = extract(&http, &WikipediaBankRow, "http://test", &TABLE_ATTRIBS).unwrap();
        assert_eq!(table.columns(), &["Name".to_string(), "MC_USD_Billion".to_string()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].name, "HSBC");
        assert_eq!(table.rows()[0].market_cap_usd, 160.68);
    }

    #[test]
    fn test_non_success_status_is_error() {
        let http = StaticPage { status: 503, body: PAGE };
        let err = extract(&http, &WikipediaBankRow, "http://test", &TABLE_ATTRIBS).unwrap_err();
        assert!(matches!(err, EtlError::HttpStatus { status: 503, .. }));
    }

    #[test]
    fn test_wrong_column_count_is_schema_error() {
        let http = StaticPage { status: 200, body: PAGE };
        let err = extract(&http, &WikipediaBankRow, "http://test", &["Name"]).unwrap_err();
        assert!(matches!(err, EtlError::Schema(_)));
    }
}
