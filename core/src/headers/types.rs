//! headers/types.rs
//! The iris representation header record and its construction paths.
//!
//! - Quality blocks are an owned `Vec`; the on-wire count is derived from it.
//! - Construction is strict: every field is checked against its domain.
//! - Decode (see `decode.rs`) is lenient and reports through diagnostics instead.

use std::fmt;
use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::codec::{DecodeContext, IrisRecord, RecordReader, RecordWriter};
use crate::constants::{
    CAPTURE_DATE_TIME_LEN, DEVICE_TECHNOLOGY_LEN, DEVICE_TYPE_LEN, DEVICE_VENDOR_LEN, MAX_QUALITY_BLOCKS,
    QUALITY_BLOCK_COUNT_LEN, REPRESENTATION_LENGTH_LEN, REPRESENTATION_NUMBER_LEN,
};
use crate::datetime::CaptureDateTime;
use crate::device::{CaptureDevice, CaptureDeviceTechnology};
use crate::image_info::ImageInformation;
use crate::quality::IrisQualityBlock;
use crate::types::{IrisError, IrisResult};
use crate::utils::enum_name_or_hex;

pub const REPRESENTATION_NUMBER_FIELD: &str = "representation_number";
pub const QUALITY_BLOCKS_FIELD: &str = "quality_blocks";

/// Fixed part of the header preceding the quality blocks and following them,
/// image information excluded.
pub(crate) const FIXED_FIELDS_LEN: u32 = REPRESENTATION_LENGTH_LEN
    + CAPTURE_DATE_TIME_LEN
    + DEVICE_TECHNOLOGY_LEN
    + DEVICE_VENDOR_LEN
    + DEVICE_TYPE_LEN
    + QUALITY_BLOCK_COUNT_LEN
    + REPRESENTATION_NUMBER_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentationHeader {
    /// Bytes of image payload that follow this header on the wire.
    pub(crate) representation_data_length: u32,
    pub(crate) capture_date_time: CaptureDateTime,
    pub(crate) capture_device: CaptureDevice,
    pub(crate) quality_blocks: Vec<IrisQualityBlock>,
    pub(crate) representation_number: u16,
    pub(crate) image_information: ImageInformation,
}

impl RepresentationHeader {
    /// Builds a header with all device identifiers unspecified.
    pub fn from_fields(
        representation_data_length: u32,
        capture_instant: DateTime<Utc>,
        quality_blocks: Vec<IrisQualityBlock>,
        image_information: ImageInformation,
        representation_number: u16,
    ) -> IrisResult<Self> {
        Self::build(
            representation_data_length,
            &capture_instant,
            CaptureDevice::unspecified(),
            quality_blocks,
            image_information,
            representation_number,
        )
    }

    /// Builds a header with caller-supplied device identifiers.
    ///
    /// Identifiers that are neither the sentinel nor registered are rejected
    /// with `InvalidField`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields_with_device(
        representation_data_length: u32,
        capture_instant: DateTime<Utc>,
        capture_device_technology_id: u8,
        capture_device_vendor_id: u16,
        capture_device_type_id: u16,
        quality_blocks: Vec<IrisQualityBlock>,
        image_information: ImageInformation,
        representation_number: u16,
    ) -> IrisResult<Self> {
        let device = CaptureDevice::new(
            capture_device_technology_id,
            capture_device_vendor_id,
            capture_device_type_id,
        )?;
        Self::build(
            representation_data_length,
            &capture_instant,
            device,
            quality_blocks,
            image_information,
            representation_number,
        )
    }

    fn build(
        representation_data_length: u32,
        capture_instant: &DateTime<Utc>,
        capture_device: CaptureDevice,
        quality_blocks: Vec<IrisQualityBlock>,
        image_information: ImageInformation,
        representation_number: u16,
    ) -> IrisResult<Self> {
        let capture_date_time = CaptureDateTime::from_instant(capture_instant)?;
        check_quality_blocks(&quality_blocks)?;
        image_information.validate()?;
        check_representation_number(representation_number)?;

        Ok(Self {
            representation_data_length,
            capture_date_time,
            capture_device,
            quality_blocks,
            representation_number,
            image_information,
        })
    }

    /// Header with every field at its zero value; filled in by the decoders.
    pub(crate) fn empty() -> Self {
        Self {
            representation_data_length: 0,
            capture_date_time: CaptureDateTime::default(),
            capture_device: CaptureDevice::unspecified(),
            quality_blocks: Vec::new(),
            representation_number: 0,
            image_information: ImageInformation::default(),
        }
    }

    // ---- accessors ----

    pub fn representation_data_length(&self) -> u32 {
        self.representation_data_length
    }

    /// Value of the leading length field: header plus payload.
    pub fn total_length(&self) -> Option<u32> {
        self.record_length().checked_add(self.representation_data_length)
    }

    pub fn capture_date_time(&self) -> &CaptureDateTime {
        &self.capture_date_time
    }

    /// Capture instant derived from the discrete fields, in UTC.
    pub fn capture_instant(&self) -> Option<DateTime<Utc>> {
        self.capture_date_time.to_instant()
    }

    pub fn capture_device(&self) -> &CaptureDevice {
        &self.capture_device
    }

    pub fn capture_device_technology_id(&self) -> u8 {
        self.capture_device.technology_id
    }

    pub fn capture_device_vendor_id(&self) -> u16 {
        self.capture_device.vendor_id
    }

    pub fn capture_device_type_id(&self) -> u16 {
        self.capture_device.type_id
    }

    pub fn no_of_quality_blocks(&self) -> u8 {
        // Setters and decoders cap the sequence at 255.
        self.quality_blocks.len() as u8
    }

    pub fn quality_blocks(&self) -> &[IrisQualityBlock] {
        &self.quality_blocks
    }

    pub fn representation_number(&self) -> u16 {
        self.representation_number
    }

    pub fn image_information(&self) -> &ImageInformation {
        &self.image_information
    }

    // ---- setters ----

    pub fn set_representation_data_length(&mut self, len: u32) {
        self.representation_data_length = len;
    }

    pub fn set_quality_blocks(&mut self, blocks: Vec<IrisQualityBlock>) -> IrisResult<()> {
        check_quality_blocks(&blocks)?;
        self.quality_blocks = blocks;
        Ok(())
    }

    pub fn push_quality_block(&mut self, block: IrisQualityBlock) -> IrisResult<()> {
        if self.quality_blocks.len() >= MAX_QUALITY_BLOCKS {
            return Err(IrisError::invalid(
                QUALITY_BLOCKS_FIELD,
                self.quality_blocks.len() as i64 + 1,
                "more than 255 quality blocks",
            ));
        }
        block.validate()?;
        self.quality_blocks.push(block);
        Ok(())
    }

    pub fn set_representation_number(&mut self, n: u16) -> IrisResult<()> {
        check_representation_number(n)?;
        self.representation_number = n;
        Ok(())
    }

    pub fn set_image_information(&mut self, info: ImageInformation) -> IrisResult<()> {
        info.validate()?;
        self.image_information = info;
        Ok(())
    }
}

pub(crate) fn check_representation_number(n: u16) -> IrisResult<()> {
    if n == 0 {
        return Err(IrisError::invalid(REPRESENTATION_NUMBER_FIELD, n, "representation numbers start at 1"));
    }
    Ok(())
}

fn check_quality_blocks(blocks: &[IrisQualityBlock]) -> IrisResult<()> {
    if blocks.len() > MAX_QUALITY_BLOCKS {
        return Err(IrisError::invalid(
            QUALITY_BLOCKS_FIELD,
            blocks.len() as i64,
            "more than 255 quality blocks",
        ));
    }
    blocks.iter().try_for_each(IrisQualityBlock::validate)
}

impl fmt::Display for RepresentationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RepresentationHeader[#{} len={}+{} captured={} tech={} vendor=0x{:04x} type=0x{:04x} quality_blocks={} {}]",
            self.representation_number,
            self.record_length(),
            self.representation_data_length,
            self.capture_date_time,
            enum_name_or_hex::<CaptureDeviceTechnology>(self.capture_device.technology_id),
            self.capture_device.vendor_id,
            self.capture_device.type_id,
            self.quality_blocks.len(),
            self.image_information
        )
    }
}

impl IrisRecord for RepresentationHeader {
    /// Header size without the image payload:
    /// 4 + 9 + 1 + 2 + 2 + 1 + Σ quality blocks + 2 + 27.
    fn record_length(&self) -> u32 {
        let quality: u32 = self.quality_blocks.iter().map(|b| b.record_length()).sum();
        FIXED_FIELDS_LEN + quality + self.image_information.record_length()
    }

    fn write_record<W: Write>(&self, out: &mut RecordWriter<W>) -> IrisResult<()> {
        super::encode::write_header(self, out)
    }

    fn read_record<R: Read>(input: &mut RecordReader<R>, ctx: &mut DecodeContext) -> IrisResult<Self> {
        super::decode::read_header(input, ctx)
    }

    fn read_image_info_only<R: Read>(
        input: &mut RecordReader<R>,
        ctx: &mut DecodeContext,
    ) -> IrisResult<Self> {
        super::decode::read_header_image_info_only(input, ctx)
    }
}
