//! headers/mod.rs
//! Iris representation header: record type, construction, encode and decode.
//!
//! Wire layout (big-endian, unsigned):
//!
//! ```text
//! [ total length (4) ]
//! [ year (2) ] [ month (1) ] [ day (1) ] [ hour (1) ] [ minute (1) ] [ second (1) ] [ millisecond (2) ]
//! [ technology id (1) ] [ vendor id (2) ] [ type id (2) ]
//! [ quality block count N (1) ] [ N x quality block (5) ]
//! [ representation number (2) ]
//! [ image information (27) ]
//! ```
//!
//! The image payload whose length the header announces follows on the wire
//! and is owned by the caller.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
