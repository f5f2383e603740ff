//! Concurrent message production pipeline for plantbench.
//!
//! A fixed pool of worker threads generates randomized measurement
//! messages in a tight loop and pushes them into a bounded FIFO queue.
//! A consumer pulls messages one at a time through a blocking call; the
//! queue provides natural backpressure when producers outrun the
//! consumer.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──▶ build_topics (one-shot, at startup)
//!                  │
//!                  ▼
//!        ┌── worker thread 0 ──┐
//!        ├── worker thread 1 ──┤     bounded        consumer
//!        │        ...          ├──▶  sync_channel ──▶ get_message()
//!        └── worker thread N ──┘
//! ```
//!
//! Each worker is permanently bound to one randomly chosen topic and
//! owns an independently seeded RNG, so there is no shared mutable
//! generation state and no contention beyond the queue itself.
//!
//! # Example
//!
//! ```rust,no_run
//! use bench_core::Catalog;
//! use bench_pipeline::{Pipeline, PipelineConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_yaml_file("catalogs/powerplant.yaml")?;
//! let pipeline = Pipeline::start(&catalog, PipelineConfig::default())?;
//!
//! let message = pipeline.get_message()?;
//! println!("{} -> {} bytes", message.topic, message.value.len());
//!
//! pipeline.stop();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pool;

// Re-exports for convenience
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pool::Pipeline;
