pub mod constants;
pub mod display;
pub mod error;
pub mod observability;
pub mod parser;
pub mod pipeline;
pub mod types;

// Layered boundaries for application ports and infrastructure adapters
pub mod app;
pub mod infra;
