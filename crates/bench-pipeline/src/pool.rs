//! Production pool, delivery queue and request counter.
//!
//! Workers and the consumer coordinate only through the bounded channel,
//! one shared running flag and one atomic request counter. A worker
//! suspends only when pushing to a full queue; the consumer suspends
//! only when pulling from an empty one. Shutdown is cooperative: the
//! flag is checked once per iteration, so a worker blocked on a full
//! queue exits only after that push succeeds.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use bench_core::Catalog;
use bench_generator::{build_message, build_topics, Message, Topic};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, SyncSender};
use std::sync::{mpsc, Arc, Mutex};
use tracing::{error, info};

/// Concurrent message production pipeline.
///
/// Safe to share across threads: the receiver side of the queue is
/// behind a mutex, the counter and flag are atomic, and the topic
/// namespace is read-only after construction.
pub struct Pipeline {
    topics: Arc<Vec<Topic>>,
    receiver: Mutex<Receiver<Message>>,
    running: Arc<AtomicBool>,
    requested: AtomicU64,
}

impl Pipeline {
    /// Build the topic namespace and start the worker pool.
    ///
    /// Fails on invalid configuration or an untraversable catalog; no
    /// partial pipeline is returned.
    pub fn start(catalog: &Catalog, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        catalog.validate()?;

        info!("Building {} topics", config.topic_count);
        let mut rng = StdRng::seed_from_u64(worker_seed(0));
        let topics = Arc::new(build_topics(catalog, config.topic_count, &mut rng)?);

        let (sender, receiver) = mpsc::sync_channel(config.queue_capacity);
        let running = Arc::new(AtomicBool::new(true));

        for i in 0..config.workers {
            let sender = sender.clone();
            let topics = Arc::clone(&topics);
            let running = Arc::clone(&running);
            let seed = worker_seed(i as u64 + 1);
            std::thread::Builder::new()
                .name(format!("plantbench-worker-{i}"))
                .spawn(move || worker_loop(sender, topics, running, seed))?;
        }
        // Drop the original sender so the channel disconnects once all
        // workers have exited.
        drop(sender);

        info!("Started {} producer workers", config.workers);
        Ok(Self {
            topics,
            receiver: Mutex::new(receiver),
            running,
            requested: AtomicU64::new(0),
        })
    }

    /// Pull the oldest buffered message, blocking while the queue is
    /// empty.
    ///
    /// The request counter is incremented only on a successful pull.
    /// Returns [`PipelineError::Stopped`] once the pipeline has been
    /// stopped and every worker has exited.
    pub fn get_message(&self) -> Result<Message, PipelineError> {
        let message = {
            let receiver = self.receiver.lock().map_err(|_| PipelineError::Stopped)?;
            receiver.recv().map_err(|_| PipelineError::Stopped)?
        };
        self.requested.fetch_add(1, Ordering::Relaxed);
        Ok(message)
    }

    /// Clear the running flag and discard buffered messages.
    ///
    /// Does not wait for in-flight worker pushes: a worker blocked on a
    /// full queue finishes its push after the drain, so the queue is not
    /// guaranteed empty when this returns. Acceptable for a best-effort
    /// benchmarking tool.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
        if let Ok(receiver) = self.receiver.lock() {
            while receiver.try_recv().is_ok() {}
        }
        info!("Pipeline stopped after {} requests", self.requested());
    }

    /// Number of messages successfully pulled so far.
    pub fn requested(&self) -> u64 {
        self.requested.load(Ordering::Relaxed)
    }

    /// The generated topic namespace (read-only).
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }
}

/// Seed material for one worker: nanosecond clock mixed with the worker
/// index so concurrent workers never share a generator state.
fn worker_seed(index: u64) -> u64 {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    nanos ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Producer loop: bind to one topic for the thread's lifetime, then
/// generate and push until the running flag clears or the consumer goes
/// away.
fn worker_loop(
    sender: SyncSender<Message>,
    topics: Arc<Vec<Topic>>,
    running: Arc<AtomicBool>,
    seed: u64,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    // The namespace is never empty: topic_count > 0 is validated at start
    let topic = match topics.choose(&mut rng) {
        Some(topic) => topic.clone(),
        None => return,
    };

    while running.load(Ordering::Relaxed) {
        let message = match build_message(&topic, &mut rng) {
            Ok(message) => message,
            Err(err) => {
                // Corrupt catalog class of failure; stop this worker
                error!("payload generation failed for '{}': {err}", topic.name);
                return;
            }
        };
        // Blocks while the queue is full (backpressure); errors only
        // when the receiver is gone.
        if sender.send(message).is_err() {
            return;
        }
    }
}
