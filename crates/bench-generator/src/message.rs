//! Message assembly: routing key prefix, partition key, encoded payload.
//!
//! The full topic name is split at [`SPLIT_POINT`] dot-separated
//! segments: the prefix becomes the routing topic, and the partition key
//! is the prefix plus the production timestamp in nanoseconds. The
//! high-cardinality, strictly increasing key keeps downstream
//! partitioning from skewing toward one partition.

use crate::payload::{generate_value, PayloadError};
use crate::topics::Topic;
use chrono::Utc;
use rand::Rng;
use std::collections::HashMap;

/// Number of leading dot-separated segments used as the routing topic.
pub const SPLIT_POINT: usize = 4;

/// Header marking the origin of generated messages.
pub const ORIGIN_HEADER: &str = "X-Origin";

/// Header carrying the trace timestamp in milliseconds.
pub const TRACE_HEADER: &str = "X-Trace";

const ORIGIN: &[u8] = b"plantbench";

/// One emitted unit of work, handed to the delivery queue and destroyed
/// once consumed.
#[derive(Debug, Clone)]
pub struct Message {
    /// Routing topic: the first [`SPLIT_POINT`] segments of the topic name
    pub topic: String,
    /// Partition key: routing topic + `.` + nanosecond timestamp
    pub key: Vec<u8>,
    /// JSON-encoded payload record
    pub value: Vec<u8>,
    /// Header set (origin marker and trace timestamp)
    pub headers: HashMap<String, Vec<u8>>,
}

/// First [`SPLIT_POINT`] dot-separated segments of a topic name.
///
/// Names with fewer segments are returned whole.
pub fn route_prefix(name: &str) -> &str {
    match name.match_indices('.').nth(SPLIT_POINT - 1) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// Build one message for the given topic.
///
/// The payload record contains `timestamp_ms` plus exactly one
/// unit-specific field; a fresh record is assembled per call so no field
/// from a previous unit can leak into the next message.
pub fn build_message<R: Rng + ?Sized>(topic: &Topic, rng: &mut R) -> Result<Message, PayloadError> {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
    let millis = nanos / 1_000_000;
    let prefix = route_prefix(&topic.name);

    let mut key = String::with_capacity(prefix.len() + 20);
    key.push_str(prefix);
    key.push('.');
    key.push_str(&nanos.to_string());

    let (field, value) = generate_value(topic.unit, topic.value_type, rng)?;
    let mut record = serde_json::Map::with_capacity(2);
    record.insert("timestamp_ms".to_owned(), millis.into());
    record.insert(field.to_owned(), value.into());
    let encoded = serde_json::to_vec(&serde_json::Value::Object(record))?;

    let mut headers = HashMap::with_capacity(2);
    headers.insert(ORIGIN_HEADER.to_owned(), ORIGIN.to_vec());
    headers.insert(TRACE_HEADER.to_owned(), millis.to_string().into_bytes());

    Ok(Message {
        topic: prefix.to_owned(),
        key: key.into_bytes(),
        value: encoded,
        headers,
    })
}
