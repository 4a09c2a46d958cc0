//! telemetry/counters.rs
//! Counters collected while decoding iris records.
//!
//! One `CodecCounters` is filled per decode call and returned on `Decoded`.
//! Callers decoding many records fold them together with `merge` or `+=`.
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub records_decoded: u64,
    pub quality_blocks_decoded: u64,
    /// Bytes consumed from the input, skipped bytes included.
    pub bytes_consumed: u64,
    /// Bytes consumed without being interpreted (image-information-only mode).
    pub bytes_skipped: u64,
    pub unknown_enumeration_values: u64,
}

impl CodecCounters {
    /// Record one representation header.
    pub fn add_record(&mut self) {
        self.records_decoded += 1;
    }

    pub fn add_quality_block(&mut self) {
        self.quality_blocks_decoded += 1;
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.records_decoded += other.records_decoded;
        self.quality_blocks_decoded += other.quality_blocks_decoded;
        self.bytes_consumed += other.bytes_consumed;
        self.bytes_skipped += other.bytes_skipped;
        self.unknown_enumeration_values += other.unknown_enumeration_values;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
