//! Stage metrics for the ETL run
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! embedding process installs a recorder.

use crate::error::Stage;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    StageDuration,
    StageFailures,
    RowsExtracted,
    QueryRows,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::StageDuration => "etl_stage_duration_seconds",
            MetricName::StageFailures => "etl_stage_failures_total",
            MetricName::RowsExtracted => "etl_rows_extracted_total",
            MetricName::QueryRows => "etl_query_rows",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn stage_duration(stage: Stage, secs: f64) {
    ::metrics::histogram!(MetricName::StageDuration.as_str(), "stage" => stage.as_str())
        .record(secs);
}

pub fn stage_failure(stage: Stage) {
    ::metrics::counter!(MetricName::StageFailures.as_str(), "stage" => stage.as_str())
        .increment(1);
}

pub fn rows_extracted(count: usize) {
    ::metrics::counter!(MetricName::RowsExtracted.as_str()).increment(count as u64);
}

pub fn query_rows(count: usize) {
    ::metrics::histogram!(MetricName::QueryRows.as_str()).record(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_follow_prometheus_conventions() {
        for name in [
            MetricName::StageDuration,
            MetricName::StageFailures,
            MetricName::RowsExtracted,
            MetricName::QueryRows,
        ] {
            assert!(name.as_str().starts_with("etl_"));
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        stage_duration(Stage::Extract, 0.5);
        stage_failure(Stage::Query);
        rows_extracted(10);
        query_rows(5);
    }
}
