//! plantbench: pull messages from the production pipeline and forward
//! them to Kafka at the maximum sustainable rate.
//!
//! The pipeline itself has no knowledge of the transport; this binary
//! owns the broker connection, pre-creates the routing topics, and
//! reports the pulled-message count when the run ends.
//!
//! To run against a local broker:
//! 1. Start Kafka with Docker:
//!    docker run -d --name kafka -p 9092:9092 apache/kafka:latest
//! 2. Run the benchmark:
//!    cargo run --release -- --catalog catalogs/powerplant.yaml

use anyhow::Context;
use bench_core::Catalog;
use bench_pipeline::{Pipeline, PipelineConfig};
use clap::Parser;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::message::{Header, OwnedHeaders};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "plantbench", about = "Synthetic plant telemetry load generator")]
struct Args {
    /// Path to the topology catalog YAML file
    #[arg(long, env = "PLANTBENCH_CATALOG")]
    catalog: PathBuf,

    /// Comma-separated Kafka broker list
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    brokers: String,

    /// How long to run before stopping, in seconds
    #[arg(long, env = "PLANTBENCH_DURATION_SECS", default_value_t = 60)]
    duration_secs: u64,

    /// Number of forwarder tasks pulling from the pipeline
    #[arg(long, default_value_t = 16)]
    senders: usize,

    /// Topic population size
    #[arg(long, default_value_t = 100_000)]
    topic_count: usize,

    /// Producer worker pool size
    #[arg(long, default_value_t = 64)]
    workers: usize,

    /// Delivery queue capacity
    #[arg(long, default_value_t = 100_000)]
    queue_capacity: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run(Args::parse()).await {
        Ok(_) => info!("Benchmark finished"),
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let catalog = Catalog::from_yaml_file(&args.catalog)
        .with_context(|| format!("failed to load catalog from {}", args.catalog.display()))?;

    let config = PipelineConfig::default()
        .with_topic_count(args.topic_count)
        .with_workers(args.workers)
        .with_queue_capacity(args.queue_capacity);
    let pipeline = Arc::new(Pipeline::start(&catalog, config)?);

    let producer: FutureProducer = ClientConfig::new()
        .set("bootstrap.servers", &args.brokers)
        .set("message.timeout.ms", "1000")
        .create()
        .context("Failed to create Kafka producer")?;

    // Routing prefixes are a small set; create them up front so the
    // first produce per topic does not stall on auto-creation.
    let prefixes: HashSet<String> = pipeline
        .topics()
        .iter()
        .map(|t| bench_generator::route_prefix(&t.name).to_string())
        .collect();
    create_topics_if_missing(&args.brokers, &prefixes).await?;

    let mut senders = Vec::with_capacity(args.senders);
    for _ in 0..args.senders {
        let pipeline = Arc::clone(&pipeline);
        let producer = producer.clone();
        senders.push(tokio::task::spawn_blocking(move || {
            forward_loop(&pipeline, &producer)
        }));
    }

    let started = Instant::now();
    tokio::time::sleep(Duration::from_secs(args.duration_secs)).await;
    pipeline.stop();

    for sender in senders {
        let _ = sender.await;
    }
    if let Err(e) = producer.flush(Duration::from_secs(5)) {
        warn!("Failed to flush producer: {e}");
    }

    let pulled = pipeline.requested();
    let elapsed = started.elapsed().as_secs_f64();
    info!(
        "Pulled {pulled} messages in {elapsed:.1}s ({:.0} msg/s)",
        pulled as f64 / elapsed
    );
    Ok(())
}

/// Pull messages until the pipeline stops, enqueueing each onto the
/// Kafka producer. Delivery is best-effort; failures are logged and the
/// message dropped.
fn forward_loop(pipeline: &Pipeline, producer: &FutureProducer) {
    loop {
        let message = match pipeline.get_message() {
            Ok(message) => message,
            Err(_) => return,
        };

        let mut headers = OwnedHeaders::new_with_capacity(message.headers.len());
        for (key, value) in &message.headers {
            headers = headers.insert(Header {
                key: key.as_str(),
                value: Some(value),
            });
        }

        let mut record = FutureRecord::to(&message.topic)
            .key(&message.key)
            .payload(&message.value)
            .headers(headers);

        loop {
            match producer.send_result(record) {
                Ok(_) => break,
                Err((KafkaError::MessageProduction(RDKafkaErrorCode::QueueFull), returned)) => {
                    record = returned;
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err((err, _)) => {
                    warn!("Failed to enqueue message: {err}");
                    break;
                }
            }
        }
    }
}

async fn create_topics_if_missing(
    brokers: &str,
    topics: &HashSet<String>,
) -> anyhow::Result<()> {
    let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
        .set("bootstrap.servers", brokers)
        .create()
        .context("Failed to create admin client")?;

    let new_topics: Vec<NewTopic> = topics
        .iter()
        .map(|name| NewTopic::new(name, 6, TopicReplication::Fixed(1)))
        .collect();
    let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(5)));

    let results = admin_client
        .create_topics(&new_topics, &opts)
        .await
        .context("Failed to create topics")?;
    for result in results {
        match result {
            Ok(topic_name) => info!("Topic '{topic_name}' created"),
            Err((topic_name, err)) => {
                if err.to_string().contains("already exists") {
                    info!("Topic '{topic_name}' already exists");
                } else {
                    anyhow::bail!("Failed to create topic '{topic_name}': {err}");
                }
            }
        }
    }
    Ok(())
}
