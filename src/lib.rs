//! Itinerary endpoint recovery.
//!
//! Layers:
//! - domain: the directed graph and its analyses (pure, synchronous)
//! - usecase: calculate / inspect workflows + progress events
//! - infrastructure: serde, schema validation, async IO, NDJSON events
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
