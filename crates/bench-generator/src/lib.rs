//! Topic namespace builder and payload generator for plantbench.
//!
//! This crate turns a [`bench_core::Catalog`] into a large flat set of
//! unique topic names and produces randomized measurement payloads for
//! them. The generator is deterministic for a given RNG, so tests can
//! inject a seeded [`rand::rngs::StdRng`].
//!
//! # Architecture
//!
//! ```text
//! Catalog (bench-core)
//!        │
//!        ▼
//! ┌────────────────┐
//! │  build_topics  │  one-shot random sampling of the hierarchy
//! └───────┬────────┘
//!         │ Vec<Topic>
//!         ▼
//! ┌────────────────┐
//! │ build_message  │  per-iteration: key, JSON payload, headers
//! └───────┬────────┘
//!         │
//!         ▼
//!       Message { topic, key, value, headers }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_core::Catalog;
//! use bench_generator::{build_message, build_topics};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::from_yaml(r#"
//! enterprise: pripyat
//! sites:
//!   - site: reactor
//!     areas:
//!       - area: turbine-hall
//!         productionLines:
//!           - productionLine: line-a
//!             workCells:
//!               - workCell: condenser
//!                 tagGroup: sensors
//!                 tags:
//!                   - name: pressure
//!                     unit: "Pa"
//!                     type: float
//! "#).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let topics = build_topics(&catalog, 10, &mut rng).unwrap();
//! let message = build_message(&topics[0], &mut rng).unwrap();
//! assert!(message.topic.starts_with("umh.v1.pripyat."));
//! ```

pub mod message;
pub mod payload;
pub mod sample;
pub mod topics;

// Re-exports for convenience
pub use message::{build_message, route_prefix, Message, SPLIT_POINT};
pub use payload::{generate_value, FieldValue, PayloadError};
pub use sample::{pick_one, EmptyLevel};
pub use topics::{build_topics, Topic, TopicBuildError};
