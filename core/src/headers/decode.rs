//! headers/decode.rs
//!
//! Representation header decoding.
//!
//! Design notes:
//! - Field order is positional and fixed; nothing inside the header is length-skipped.
//! - Unknown device identifiers and out-of-domain values go through
//!   `DecodeContext::check`: kept raw with a diagnostic, or fatal under strict options.
//! - The leading length is the wire total; the record keeps
//!   `representation_data_length = total - record_length()` so encode reproduces it.
//! - The image-information-only path consumes exactly the same bytes as the full path.

use std::io::Read;

use crate::codec::{
    decode_record, decode_record_image_info_only, DecodeContext, DecodeOptions, Decoded, IrisRecord,
    RecordReader,
};
use crate::constants::IMAGE_INFO_ONLY_SKIP_LEN;
use crate::datetime::CaptureDateTime;
use crate::device::{CaptureDeviceTechnology, CaptureDeviceType, CaptureDeviceVendor, Registry};
use crate::headers::types::{check_representation_number, RepresentationHeader};
use crate::image_info::ImageInformation;
use crate::quality::IrisQualityBlock;
use crate::types::{Diagnostic, IrisResult};

impl RepresentationHeader {
    /// Decodes every field, keeping unknown identifiers with a diagnostic.
    pub fn decode_full<R: Read>(input: R) -> IrisResult<Decoded<Self>> {
        Self::decode_full_with(input, DecodeOptions::default())
    }

    pub fn decode_full_with<R: Read>(input: R, options: DecodeOptions) -> IrisResult<Decoded<Self>> {
        decode_record(input, options)
    }

    /// Decodes only what is needed to locate the image.
    ///
    /// Timestamp and device identifiers are skipped and left at zero.
    pub fn decode_image_info_only<R: Read>(input: R) -> IrisResult<Decoded<Self>> {
        Self::decode_image_info_only_with(input, DecodeOptions::default())
    }

    pub fn decode_image_info_only_with<R: Read>(input: R, options: DecodeOptions) -> IrisResult<Decoded<Self>> {
        decode_record_image_info_only(input, options)
    }

    /// Converts the wire total into the payload length held by the record.
    fn settle_payload_length(&mut self, wire_length: u32, ctx: &mut DecodeContext) {
        let record_length = self.record_length();
        self.representation_data_length = match wire_length.checked_sub(record_length) {
            Some(payload) => payload,
            None => {
                ctx.note(Diagnostic::TotalLengthTooSmall { wire_length, record_length });
                0
            }
        };
    }
}

pub(crate) fn read_header<R: Read>(
    input: &mut RecordReader<R>,
    ctx: &mut DecodeContext,
) -> IrisResult<RepresentationHeader> {
    let mut h = RepresentationHeader::empty();

    let wire_length = input.read_u32("representation_length")?;

    h.capture_date_time = CaptureDateTime::read_from(input)?;
    for verdict in h.capture_date_time.field_checks() {
        ctx.check(verdict)?;
    }

    h.capture_device.technology_id = input.read_u8(CaptureDeviceTechnology::FIELD)?;
    ctx.check(CaptureDeviceTechnology::verify(h.capture_device.technology_id))?;

    h.capture_device.vendor_id = input.read_u16(CaptureDeviceVendor::FIELD)?;
    ctx.check(CaptureDeviceVendor::verify(h.capture_device.vendor_id))?;

    h.capture_device.type_id = input.read_u16(CaptureDeviceType::FIELD)?;
    ctx.check(CaptureDeviceType::verify(h.capture_device.type_id))?;

    h.quality_blocks = read_quality_blocks(input, ctx, IrisQualityBlock::read_record)?;

    h.representation_number = input.read_u16("representation_number")?;
    ctx.check(check_representation_number(h.representation_number))?;

    h.image_information = ImageInformation::read_record(input, ctx)?;

    h.settle_payload_length(wire_length, ctx);
    ctx.counters_mut().add_record();
    Ok(h)
}

pub(crate) fn read_header_image_info_only<R: Read>(
    input: &mut RecordReader<R>,
    ctx: &mut DecodeContext,
) -> IrisResult<RepresentationHeader> {
    let mut h = RepresentationHeader::empty();

    let wire_length = input.read_u32("representation_length")?;
    // 9 (date/time) + 1 (technology) + 2 (vendor) + 2 (type)
    input.skip(IMAGE_INFO_ONLY_SKIP_LEN, "capture_date_time_and_device")?;

    h.quality_blocks = read_quality_blocks(input, ctx, IrisQualityBlock::read_image_info_only)?;
    h.representation_number = input.read_u16("representation_number")?;
    h.image_information = ImageInformation::read_image_info_only(input, ctx)?;

    h.settle_payload_length(wire_length, ctx);
    ctx.counters_mut().add_record();
    Ok(h)
}

fn read_quality_blocks<R, F>(
    input: &mut RecordReader<R>,
    ctx: &mut DecodeContext,
    read_block: F,
) -> IrisResult<Vec<IrisQualityBlock>>
where
    R: Read,
    F: Fn(&mut RecordReader<R>, &mut DecodeContext) -> IrisResult<IrisQualityBlock>,
{
    let count = input.read_u8("quality_block_count")?;
    let mut blocks = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        blocks.push(read_block(input, ctx)?);
    }
    Ok(blocks)
}
