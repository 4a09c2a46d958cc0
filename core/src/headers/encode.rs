//! headers/encode.rs
//!
//! Representation header encoding.
//!
//! Design notes:
//! - Field order must match `decode.rs` exactly.
//! - The leading length is `record_length() + representation_data_length`, the
//!   wire total; the payload itself is written by the caller.
//! - The month is shifted to one-based inside `CaptureDateTime::write_to` only.

use std::io::Write;

use crate::codec::{encode_record, IrisRecord, RecordWriter};
use crate::headers::types::RepresentationHeader;
use crate::types::{IrisError, IrisResult};

impl RepresentationHeader {
    /// Encodes the header into `sink`.
    ///
    /// All fields are staged in memory before the sink sees a byte; a failing
    /// or short-writing sink yields `IrisError::Io`.
    pub fn encode<W: Write>(&self, sink: W) -> IrisResult<()> {
        encode_record(self, sink)
    }
}

pub(crate) fn write_header<W: Write>(h: &RepresentationHeader, out: &mut RecordWriter<W>) -> IrisResult<()> {
    let total = h.total_length().ok_or_else(|| {
        IrisError::invalid(
            "representation_data_length",
            h.representation_data_length,
            "header plus payload exceeds u32",
        )
    })?;

    out.write_u32(total)?;                                   // 0..4   total record length
    h.capture_date_time.write_to(out)?;                      // 4..13  capture date/time
    out.write_u8(h.capture_device.technology_id)?;           // 13     technology id
    out.write_u16(h.capture_device.vendor_id)?;              // 14..16 vendor id
    out.write_u16(h.capture_device.type_id)?;                // 16..18 type id
    out.write_u8(h.no_of_quality_blocks())?;                 // 18     quality block count

    for block in &h.quality_blocks {                         // 19..   5 bytes each
        block.write_record(out)?;
    }

    out.write_u16(h.representation_number)?;                 // 19+Σ   representation number
    h.image_information.write_record(out)                    // 21+Σ   image information (27)
}
