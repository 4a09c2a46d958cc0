//! codec/writer.rs
//!
//! Big-endian writer over any `std::io::Write`, counting bytes written.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::types::IrisResult;

#[derive(Debug)]
pub struct RecordWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_u8(&mut self, v: u8) -> IrisResult<()> {
        self.inner.write_u8(v)?;
        self.written += 1;
        Ok(())
    }

    pub fn write_u16(&mut self, v: u16) -> IrisResult<()> {
        self.inner.write_u16::<BigEndian>(v)?;
        self.written += 2;
        Ok(())
    }

    pub fn write_u32(&mut self, v: u32) -> IrisResult<()> {
        self.inner.write_u32::<BigEndian>(v)?;
        self.written += 4;
        Ok(())
    }
}
