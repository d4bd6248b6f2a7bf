/// Fixed inputs and outputs of the ETL run

// Archived listing of the largest banks by market capitalization
pub const BANKS_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

// Columns produced by the extractor
pub const NAME_COLUMN: &str = "Name";
pub const MC_USD_COLUMN: &str = "MC_USD_Billion";
pub const TABLE_ATTRIBS: [&str; 2] = [NAME_COLUMN, MC_USD_COLUMN];

// Columns appended by the transformer, in order
pub const MC_GBP_COLUMN: &str = "MC_GBP_Billion";
pub const MC_EUR_COLUMN: &str = "MC_EUR_Billion";
pub const MC_INR_COLUMN: &str = "MC_INR_Billion";

// Currency codes the rate file must carry
pub const GBP: &str = "GBP";
pub const EUR: &str = "EUR";
pub const INR: &str = "INR";

// Paths
pub const EXCHANGE_RATE_PATH: &str = "./exchange_rate.csv";
pub const OUTPUT_CSV_PATH: &str = "./Largest_banks_data.csv";
pub const DB_PATH: &str = "Banks.db";
pub const TABLE_NAME: &str = "Largest_banks";
pub const PROGRESS_LOG_PATH: &str = "./code_log.txt";

// Read queries run after loading, in order
pub const QUERY_ALL: &str = "SELECT * FROM Largest_banks";
pub const QUERY_AVG_GBP: &str = "SELECT AVG(MC_GBP_Billion) FROM Largest_banks";
pub const QUERY_TOP5_NAMES: &str = "SELECT Name from Largest_banks LIMIT 5";
pub const QUERIES: [&str; 3] = [QUERY_ALL, QUERY_AVG_GBP, QUERY_TOP5_NAMES];

// Progress log lifecycle messages
pub const MSG_PRELIMINARIES: &str = "Preliminaries complete. Initiating ETL process";
pub const MSG_EXTRACTED: &str = "Data extraction complete. Initiating Transformation process";
pub const MSG_TRANSFORMED: &str = "Data transformation complete. Initiating Loading process";
pub const MSG_CSV_SAVED: &str = "Data saved to CSV file";
pub const MSG_DB_CONNECTED: &str = "SQL Connection initiated";
pub const MSG_DB_LOADED: &str = "Data loaded to Database as a table, Executing queries";
pub const MSG_COMPLETE: &str = "Process Complete";
pub const MSG_DB_CLOSED: &str = "Server Connection closed";

// HTTP
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
