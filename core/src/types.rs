//! types.rs
//! Unified error and diagnostic types for the iris codec.
//!
//! - `IrisError` is fatal: the decode/encode call that produced it returns no record.
//! - `Diagnostic` is recoverable: it rides along with a successfully decoded record.

use std::fmt;
use std::io;

use serde::Serialize;
use thiserror::Error;

/// Convenient alias used across the crate.
pub type IrisResult<T> = Result<T, IrisError>;

#[derive(Debug, Error)]
pub enum IrisError {
    /// Input ended before a field could be read in full.
    #[error("unexpected end of input while reading {field} at offset {position}")]
    UnexpectedEndOfInput { field: &'static str, position: u64 },

    /// Sink or source failure other than running out of input.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A value lies outside its declared domain.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidField {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// Identifier that is neither the unspecified sentinel nor a known value.
    #[error("unknown {field}: 0x{raw:x}")]
    UnknownEnumerationValue { field: &'static str, raw: u32 },
}

impl IrisError {
    pub fn invalid(field: &'static str, value: impl Into<i64>, reason: &'static str) -> Self {
        IrisError::InvalidField { field, value: value.into(), reason }
    }

    pub fn unknown(field: &'static str, raw: impl Into<u32>) -> Self {
        IrisError::UnknownEnumerationValue { field, raw: raw.into() }
    }
}

/// Non-fatal condition observed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// Device or registry identifier not in the known table; the raw value was kept.
    UnknownEnumerationValue { field: &'static str, raw: u32 },

    /// Decoded value outside its declared domain; the raw value was kept.
    ///
    /// `raw` is the value as read from the wire (the month is one-based here).
    ValueOutOfDomain { field: &'static str, raw: i64 },

    /// Leading length field smaller than the header's own size.
    TotalLengthTooSmall { wire_length: u32, record_length: u32 },
}

impl Diagnostic {
    pub fn field(&self) -> &'static str {
        match self {
            Diagnostic::UnknownEnumerationValue { field, .. }
            | Diagnostic::ValueOutOfDomain { field, .. } => field,
            Diagnostic::TotalLengthTooSmall { .. } => "representation_length",
        }
    }

    /// Converts a recoverable error into its diagnostic form.
    pub(crate) fn from_error(err: &IrisError) -> Option<Self> {
        match *err {
            IrisError::UnknownEnumerationValue { field, raw } => {
                Some(Diagnostic::UnknownEnumerationValue { field, raw })
            }
            IrisError::InvalidField { field, value, .. } => {
                Some(Diagnostic::ValueOutOfDomain { field, raw: value })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Diagnostic::*;
        match self {
            UnknownEnumerationValue { field, raw } =>
                write!(f, "unknown {}: 0x{:x} (kept raw)", field, raw),
            ValueOutOfDomain { field, raw } =>
                write!(f, "{} out of domain: {} (kept raw)", field, raw),
            TotalLengthTooSmall { wire_length, record_length } =>
                write!(f, "representation length {} < header length {}", wire_length, record_length),
        }
    }
}
