use crate::constants::{EUR, GBP, INR, MC_EUR_COLUMN, MC_GBP_COLUMN, MC_INR_COLUMN};
use crate::error::{EtlError, Result};
use crate::types::{BankTable, EnrichedBankRecord, EnrichedBankTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// USD-relative multiplicative rates for the converted currencies.
///
/// Each rate is positive and finite. Other currencies in the source are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRateTable {
    pub gbp: f64,
    pub eur: f64,
    pub inr: f64,
}

impl ExchangeRateTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut rates = HashMap::new();
        for row in reader.deserialize::<RateRow>() {
            let row = row?;
            rates.insert(row.currency, row.rate);
        }
        Self::from_map(rates)
    }

    pub fn from_map(rates: HashMap<String, f64>) -> Result<Self> {
        let required = |currency: &str| -> Result<f64> {
            let rate = *rates
                .get(currency)
                .ok_or_else(|| EtlError::MissingRate(currency.to_string()))?;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(EtlError::InvalidRate {
                    currency: currency.to_string(),
                    rate,
                });
            }
            Ok(rate)
        };
        Ok(Self {
            gbp: required(GBP)?,
            eur: required(EUR)?,
            inr: required(INR)?,
        })
    }
}

/// Rounds half away from zero to 2 decimal places, applied to the scaled
/// product: `91.845` becomes `91.85`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Loads the rate file at `rates_path` and appends the GBP, EUR and INR columns.
#[instrument(skip(table), fields(rows = table.len()))]
pub fn transform(table: BankTable, rates_path: &Path) -> Result<EnrichedBankTable> {
    let rates = ExchangeRateTable::from_path(rates_path)?;
    Ok(enrich(table, &rates))
}

/// Appends the converted columns; row count and order are unchanged.
pub fn enrich(table: BankTable, rates: &ExchangeRateTable) -> EnrichedBankTable {
    let ExchangeRateTable { gbp, eur, inr } = *rates;
    debug!("Converting with GBP={} EUR={} INR={}", gbp, eur, inr);

    let (mut columns, rows) = table.into_parts();
    columns.extend([MC_GBP_COLUMN, MC_EUR_COLUMN, MC_INR_COLUMN].map(String::from));

    let rows = rows
        .into_iter()
        .map(|r| EnrichedBankRecord {
            market_cap_gbp: round2(r.market_cap_usd * gbp),
            market_cap_eur: round2(r.market_cap_usd * eur),
            market_cap_inr: round2(r.market_cap_usd * inr),
            market_cap_usd: r.market_cap_usd,
            name: r.name,
        })
        .collect();

    EnrichedBankTable::new(columns, rows)
}
