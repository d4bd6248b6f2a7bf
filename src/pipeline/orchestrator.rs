use super::pipeline_config::PipelineConfig;
use super::steps::{self, QueryResult};
use crate::app::ports::HttpClientPort;
use crate::constants::{
    MSG_COMPLETE, MSG_CSV_SAVED, MSG_DB_CLOSED, MSG_DB_CONNECTED, MSG_DB_LOADED, MSG_EXTRACTED,
    MSG_PRELIMINARIES, MSG_TRANSFORMED,
};
use crate::error::{EtlError, Stage, StageError};
use crate::observability::{metrics, ProgressLog};
use crate::parser::{RowRule, WikipediaBankRow};
use rusqlite::Connection;
use std::io::Write;
use std::time::Instant;
use tracing::{error, info, info_span};

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunReport {
    pub rows: usize,
    pub queries: Vec<QueryResult>,
}

/// Runs extract, transform, both sinks and the read queries in a fixed order.
///
/// Every stage returns a `Result`; the first failure stops the run, is
/// written to the progress log, and comes back tagged with its [`Stage`].
/// The database connection is released on every path.
pub struct PipelineOrchestrator {
    config: PipelineConfig,
    progress: ProgressLog,
    http: Box<dyn HttpClientPort>,
    rule: Box<dyn RowRule>,
}

impl PipelineOrchestrator {
    pub fn new(config: PipelineConfig, http: Box<dyn HttpClientPort>) -> Self {
        let progress = ProgressLog::new(&config.log_path);
        Self {
            config,
            progress,
            http,
            rule: Box::new(WikipediaBankRow),
        }
    }

    /// Runs the pipeline, printing tables and query results to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunReport, StageError> {
        let cfg = &self.config;
        self.progress.log_progress(MSG_PRELIMINARIES);

        let attribs: Vec<&str> = cfg.table_attribs.iter().map(String::as_str).collect();
        let extracted = self.stage(Stage::Extract, || {
            let table = steps::extract(&*self.http, &*self.rule, &cfg.url, &attribs)?;
            write!(out, "{}", table)?;
            Ok(table)
        })?;
        metrics::rows_extracted(extracted.len());
        self.progress.log_progress(MSG_EXTRACTED);

        let enriched = self.stage(Stage::Transform, || {
            let table = steps::transform(extracted, &cfg.rates_path)?;
            write!(out, "{}", table)?;
            Ok(table)
        })?;
        self.progress.log_progress(MSG_TRANSFORMED);

        self.stage(Stage::LoadCsv, || steps::load_to_csv(&enriched, &cfg.csv_path))?;
        self.progress.log_progress(MSG_CSV_SAVED);

        // Dropped on any early return below, which closes the connection.
        let mut conn = self.stage(Stage::ConnectDb, || Ok(Connection::open(&cfg.db_path)?))?;
        self.progress.log_progress(MSG_DB_CONNECTED);

        self.stage(Stage::LoadDb, || {
            steps::load_to_db(&enriched, &mut conn, &cfg.table_name)
        })?;
        self.progress.log_progress(MSG_DB_LOADED);

        let mut queries = Vec::with_capacity(cfg.queries.len());
        for query in &cfg.queries {
            let result = self.stage(Stage::Query, || steps::run_query(&mut *out, query, &conn))?;
            metrics::query_rows(result.rows.len());
            queries.push(result);
        }
        self.progress.log_progress(MSG_COMPLETE);

        self.stage(Stage::CloseDb, || {
            conn.close().map_err(|(_, e)| EtlError::Database(e))
        })?;
        self.progress.log_progress(MSG_DB_CLOSED);

        Ok(RunReport {
            rows: enriched.len(),
            queries,
        })
    }

    fn stage<T>(
        &self,
        stage: Stage,
        f: impl FnOnce() -> crate::error::Result<T>,
    ) -> Result<T, StageError> {
        let span = info_span!("stage", stage = %stage);
        let _enter = span.enter();
        let started = Instant::now();

        let outcome = f();
        metrics::stage_duration(stage, started.elapsed().as_secs_f64());

        match outcome {
            Ok(value) => {
                info!("Stage {} finished", stage);
                Ok(value)
            }
            Err(source) => {
                let err = StageError::new(stage, source);
                metrics::stage_failure(stage);
                error!("{}", err);
                self.progress.log_progress(&err.to_string());
                Err(err)
            }
        }
    }
}
