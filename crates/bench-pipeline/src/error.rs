//! Error types for the production pipeline.

use thiserror::Error;

/// Errors that can occur while constructing or driving the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid pipeline configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] bench_core::CatalogError),

    /// Topic namespace construction failed.
    #[error("Topic build error: {0}")]
    TopicBuild(#[from] bench_generator::TopicBuildError),

    /// Worker thread could not be spawned.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The pipeline has been stopped and the queue is fully drained.
    #[error("pipeline stopped")]
    Stopped,
}
