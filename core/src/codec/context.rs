//! codec/context.rs
//!
//! Decode configuration and the per-call state threaded through sub-record decoders.

use log::warn;

use crate::telemetry::CodecCounters;
use crate::types::{Diagnostic, IrisError, IrisResult};

/// What to do with identifiers and values outside their declared domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnumerationPolicy {
    /// Keep the raw value, record a `Diagnostic`, continue.
    #[default]
    Lenient,
    /// Abort the decode with the underlying error.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub enumeration_policy: EnumerationPolicy,
}

impl DecodeOptions {
    pub fn lenient() -> Self {
        Self { enumeration_policy: EnumerationPolicy::Lenient }
    }

    pub fn strict() -> Self {
        Self { enumeration_policy: EnumerationPolicy::Strict }
    }

    pub fn is_strict(&self) -> bool {
        self.enumeration_policy == EnumerationPolicy::Strict
    }
}

/// Mutable state for a single decode call.
#[derive(Debug, Default)]
pub struct DecodeContext {
    options: DecodeOptions,
    diagnostics: Vec<Diagnostic>,
    counters: CodecCounters,
}

impl DecodeContext {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options, ..Default::default() }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn counters_mut(&mut self) -> &mut CodecCounters {
        &mut self.counters
    }

    /// Applies the enumeration policy to a validation verdict.
    ///
    /// Recoverable errors become diagnostics under `Lenient` and are returned
    /// under `Strict`. Anything else is always returned.
    pub fn check(&mut self, verdict: IrisResult<()>) -> IrisResult<()> {
        let err = match verdict {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        if let IrisError::UnknownEnumerationValue { .. } = err {
            self.counters.unknown_enumeration_values += 1;
        }
        if self.options.is_strict() {
            return Err(err);
        }
        match Diagnostic::from_error(&err) {
            Some(diagnostic) => {
                self.note(diagnostic);
                Ok(())
            }
            None => Err(err),
        }
    }

    /// Records a diagnostic unconditionally.
    pub fn note(&mut self, diagnostic: Diagnostic) {
        warn!("iris decode: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish<T>(mut self, record: T, bytes_consumed: u64, bytes_skipped: u64) -> Decoded<T> {
        self.counters.bytes_consumed += bytes_consumed;
        self.counters.bytes_skipped += bytes_skipped;
        Decoded {
            record,
            bytes_consumed,
            diagnostics: self.diagnostics,
            counters: self.counters,
        }
    }
}

/// A successfully decoded record with everything observed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub record: T,
    pub bytes_consumed: u64,
    pub diagnostics: Vec<Diagnostic>,
    pub counters: CodecCounters,
}

impl<T> Decoded<T> {
    pub fn into_record(self) -> T {
        self.record
    }

    /// True when no diagnostics were raised.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_unknown_enumeration(&self, field: &str) -> bool {
        self.diagnostics.iter().any(|d| {
            matches!(d, Diagnostic::UnknownEnumerationValue { field: f, .. } if *f == field)
        })
    }
}
