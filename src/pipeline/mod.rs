// ETL pipeline: stage implementations and the orchestrator that sequences them

pub mod orchestrator;
pub mod pipeline_config;
pub mod steps;

pub use orchestrator::{PipelineOrchestrator, RunReport};
pub use pipeline_config::PipelineConfig;
