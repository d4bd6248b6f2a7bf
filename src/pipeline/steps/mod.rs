// Pipeline stages, in run order

pub mod extract;
pub mod transform;
pub mod load_csv;
pub mod load_db;
pub mod query;

pub use extract::extract;
pub use load_csv::load_to_csv;
pub use load_db::load_to_db;
pub use query::{fetch, run_query, QueryResult};
pub use transform::{enrich, round2, transform, ExchangeRateTable};
