//! Core types for the plantbench telemetry generator.
//!
//! This crate provides the foundational types shared across the
//! benchmark workspace:
//!
//! - [`Catalog`] - Immutable description of the simulated plant hierarchy
//!   (enterprise → site → area → production line → work cell → tag)
//! - [`Unit`] / [`ValueType`] - Measurement unit and value type carried by
//!   each tag, which determine the payload shape downstream
//! - [`CatalogError`] - Errors raised while loading or validating a catalog
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── bench-generator  (samples the catalog into a topic namespace)
//!    │
//!    └─── bench-pipeline   (drives concurrent message production)
//! ```
//!
//! The catalog is loaded once at startup from a YAML definition and is
//! never mutated afterward, so it can be shared across worker threads
//! without synchronization.

pub mod catalog;

// Re-exports for convenience
pub use catalog::{
    Area, Catalog, CatalogError, ProductionLine, Site, Tag, Unit, ValueType, WorkCell,
};
