use crate::constants::{
    BANKS_URL, DB_PATH, EXCHANGE_RATE_PATH, OUTPUT_CSV_PATH, PROGRESS_LOG_PATH, QUERIES,
    TABLE_ATTRIBS, TABLE_NAME,
};
use std::path::{Path, PathBuf};

/// Inputs and outputs of one run. `Default` is the fixed production setup.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub url: String,
    pub table_attribs: Vec<String>,
    pub rates_path: PathBuf,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub table_name: String,
    pub log_path: PathBuf,
    pub queries: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            url: BANKS_URL.to_string(),
            table_attribs: TABLE_ATTRIBS.iter().map(|s| s.to_string()).collect(),
            rates_path: PathBuf::from(EXCHANGE_RATE_PATH),
            csv_path: PathBuf::from(OUTPUT_CSV_PATH),
            db_path: PathBuf::from(DB_PATH),
            table_name: TABLE_NAME.to_string(),
            log_path: PathBuf::from(PROGRESS_LOG_PATH),
            queries: QUERIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PipelineConfig {
    /// Same setup with every file path resolved under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            rates_path: root.join(&defaults.rates_path),
            csv_path: root.join(&defaults.csv_path),
            db_path: root.join(&defaults.db_path),
            log_path: root.join(&defaults.log_path),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_setup() {
        let config = PipelineConfig::default();
        assert_eq!(config.table_attribs, vec!["Name", "MC_USD_Billion"]);
        assert_eq!(config.table_name, "Largest_banks");
        assert_eq!(config.queries.len(), 3);
        assert!(config.url.contains("List_of_largest_banks"));
    }

    #[test]
    fn test_rooted_at_moves_files_only() {
        let config = PipelineConfig::rooted_at("/tmp/run");
        assert!(config.db_path.starts_with("/tmp/run"));
        assert!(config.csv_path.starts_with("/tmp/run"));
        assert!(config.log_path.starts_with("/tmp/run"));
        assert!(config.rates_path.starts_with("/tmp/run"));
        assert_eq!(config.table_name, "Largest_banks");
    }
}
