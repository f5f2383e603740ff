//! Configuration for the production pipeline.

use crate::error::PipelineError;

/// Pipeline sizing knobs.
///
/// All three values must be greater than zero; [`PipelineConfig::validate`]
/// is called by [`crate::Pipeline::start`] before anything is spawned.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of topics to generate at startup.
    pub topic_count: usize,
    /// Number of concurrent producer threads.
    pub workers: usize,
    /// Capacity of the bounded delivery queue.
    pub queue_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            topic_count: 100_000,
            workers: 64,
            queue_capacity: 100_000,
        }
    }
}

impl PipelineConfig {
    /// Set the topic population size.
    pub fn with_topic_count(mut self, topic_count: usize) -> Self {
        self.topic_count = topic_count;
        self
    }

    /// Set the worker pool size.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the delivery queue capacity.
    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Reject zero-valued knobs.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.topic_count == 0 {
            return Err(PipelineError::Config(
                "topic_count must be greater than zero".into(),
            ));
        }
        if self.workers == 0 {
            return Err(PipelineError::Config(
                "workers must be greater than zero".into(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(PipelineError::Config(
                "queue_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert_eq!(config.topic_count, 100_000);
        assert_eq!(config.workers, 64);
        assert_eq!(config.queue_capacity, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_topic_count(10)
            .with_workers(2)
            .with_queue_capacity(32);
        assert_eq!(config.topic_count, 10);
        assert_eq!(config.workers, 2);
        assert_eq!(config.queue_capacity, 32);
    }

    #[test]
    fn test_zero_values_rejected() {
        for config in [
            PipelineConfig::default().with_topic_count(0),
            PipelineConfig::default().with_workers(0),
            PipelineConfig::default().with_queue_capacity(0),
        ] {
            assert!(matches!(
                config.validate(),
                Err(PipelineError::Config(_))
            ));
        }
    }
}
