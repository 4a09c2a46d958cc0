//! telemetry/mod.rs
//! Decode counters for iris record processing.
//!
//! Counters are plain values owned by each decode call: no globals, no atomics.
//! They serialize with serde so an assembler can export them alongside its own metrics.

pub mod counters;

pub use counters::*;
