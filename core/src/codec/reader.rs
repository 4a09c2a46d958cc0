//! codec/reader.rs
//!
//! Position-tracking big-endian reader over any `std::io::Read`.
//!
//! Every read names the field being decoded so that running out of input is
//! reported as `UnexpectedEndOfInput { field, position }` rather than a bare
//! `io::Error`.

use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::types::{IrisError, IrisResult};

#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    position: u64,
    skipped: u64,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0, skipped: 0 }
    }

    /// Bytes consumed so far, skipped bytes included.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes consumed without being interpreted.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn read_u8(&mut self, field: &'static str) -> IrisResult<u8> {
        let r = self.inner.read_u8();
        self.track(r, 1, field)
    }

    pub fn read_u16(&mut self, field: &'static str) -> IrisResult<u16> {
        let r = self.inner.read_u16::<BigEndian>();
        self.track(r, 2, field)
    }

    pub fn read_u32(&mut self, field: &'static str) -> IrisResult<u32> {
        let r = self.inner.read_u32::<BigEndian>();
        self.track(r, 4, field)
    }

    /// Consumes exactly `len` bytes without interpreting them.
    pub fn skip(&mut self, len: u32, field: &'static str) -> IrisResult<()> {
        let want = u64::from(len);
        let got = io::copy(&mut (&mut self.inner).take(want), &mut io::sink())?;
        if got < want {
            return Err(IrisError::UnexpectedEndOfInput {
                field,
                position: self.position + got,
            });
        }
        self.position += want;
        self.skipped += want;
        Ok(())
    }

    fn track<T>(&mut self, r: io::Result<T>, width: u64, field: &'static str) -> IrisResult<T> {
        match r {
            Ok(v) => {
                self.position += width;
                Ok(v)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(IrisError::UnexpectedEndOfInput { field, position: self.position })
            }
            Err(e) => Err(IrisError::Io(e)),
        }
    }
}

impl<'a> From<&'a [u8]> for RecordReader<&'a [u8]> {
    fn from(bytes: &'a [u8]) -> Self {
        RecordReader::new(bytes)
    }
}
