//! codec/mod.rs
//!
//! Record plumbing shared by every sub-record of the representation header.
//!
//! Responsibilities:
//! - The `IrisRecord` capability every sub-record implements
//! - Big-endian reader/writer with field-level error context
//! - Decode policy and per-call diagnostics
//!
//! Non-responsibilities:
//! - Field semantics (see `headers`, `quality`, `image_info`)
//! - Image payload bytes

pub mod context;
pub mod reader;
pub mod writer;

use std::io::{Read, Write};

use log::debug;

pub use context::{DecodeContext, DecodeOptions, Decoded, EnumerationPolicy};
pub use reader::RecordReader;
pub use writer::RecordWriter;

use crate::types::IrisResult;

/// A fixed-layout record that knows its own size and both decode modes.
pub trait IrisRecord: Sized {
    /// Serialized size in bytes, excluding any payload the record only references.
    fn record_length(&self) -> u32;

    fn write_record<W: Write>(&self, out: &mut RecordWriter<W>) -> IrisResult<()>;

    /// Full decode.
    fn read_record<R: Read>(input: &mut RecordReader<R>, ctx: &mut DecodeContext) -> IrisResult<Self>;

    /// Decode only what is needed to locate image data.
    ///
    /// Must consume exactly as many bytes as `read_record`.
    fn read_image_info_only<R: Read>(
        input: &mut RecordReader<R>,
        ctx: &mut DecodeContext,
    ) -> IrisResult<Self>;

    /// Serializes into a buffer sized from `record_length()`.
    fn to_bytes(&self) -> IrisResult<Vec<u8>> {
        let mut out = RecordWriter::new(Vec::with_capacity(self.record_length() as usize));
        self.write_record(&mut out)?;
        debug_assert_eq!(out.written(), u64::from(self.record_length()), "record_length drifted from layout");
        Ok(out.into_inner())
    }
}

/// Encodes `record` into `sink`.
///
/// The record is staged in memory and handed to the sink in one `write_all`.
/// Layout errors surface before the sink is touched; any sink failure is `IrisError::Io`.
pub fn encode_record<T: IrisRecord, W: Write>(record: &T, sink: W) -> IrisResult<()> {
    let bytes = record.to_bytes()?;
    let mut out = sink;
    out.write_all(&bytes)?;
    out.flush()?;
    debug!("iris encode: {} bytes", bytes.len());
    Ok(())
}

pub fn decode_record<T: IrisRecord, R: Read>(input: R, options: DecodeOptions) -> IrisResult<Decoded<T>> {
    let mut reader = RecordReader::new(input);
    let mut ctx = DecodeContext::new(options);
    let record = T::read_record(&mut reader, &mut ctx)?;
    debug!("iris decode (full): {} bytes", reader.position());
    Ok(ctx.finish(record, reader.position(), reader.skipped()))
}

pub fn decode_record_image_info_only<T: IrisRecord, R: Read>(
    input: R,
    options: DecodeOptions,
) -> IrisResult<Decoded<T>> {
    let mut reader = RecordReader::new(input);
    let mut ctx = DecodeContext::new(options);
    let record = T::read_image_info_only(&mut reader, &mut ctx)?;
    debug!("iris decode (image info only): {} bytes", reader.position());
    Ok(ctx.finish(record, reader.position(), reader.skipped()))
}
