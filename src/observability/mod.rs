// Observability: tracing setup, stage metrics, and the run's progress log

pub mod logging;
pub mod metrics;
pub mod progress;

pub use logging::init_logging;
pub use progress::ProgressLog;
