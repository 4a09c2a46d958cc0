//! quality.rs
//! Iris quality block: one algorithm's quality assessment of a representation.
//!
//! Layout (5 bytes, big-endian):
//!
//! ```text
//! [ quality score (1) ]
//! [ algorithm vendor id (2) ]
//! [ algorithm id (2) ]
//! ```

use std::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::codec::{DecodeContext, IrisRecord, RecordReader, RecordWriter};
use crate::constants::{quality, QUALITY_BLOCK_LEN};
use crate::types::{IrisError, IrisResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IrisQualityBlock {
    /// 0–100, or 255 when the algorithm failed to compute a score.
    pub quality_score: u8,
    pub algorithm_vendor_id: u16,
    pub algorithm_id: u16,
}

impl IrisQualityBlock {
    pub fn new(quality_score: u8, algorithm_vendor_id: u16, algorithm_id: u16) -> IrisResult<Self> {
        let block = Self { quality_score, algorithm_vendor_id, algorithm_id };
        block.validate()?;
        Ok(block)
    }

    /// Block recording that the algorithm could not compute a score.
    pub fn failed(algorithm_vendor_id: u16, algorithm_id: u16) -> Self {
        Self { quality_score: quality::FAILED_TO_COMPUTE, algorithm_vendor_id, algorithm_id }
    }

    pub fn is_failed(&self) -> bool {
        self.quality_score == quality::FAILED_TO_COMPUTE
    }

    pub fn validate(&self) -> IrisResult<()> {
        if self.quality_score > quality::MAX_SCORE && !self.is_failed() {
            return Err(IrisError::invalid("quality_score", self.quality_score, "outside 0..=100 and not 255"));
        }
        Ok(())
    }
}

impl IrisRecord for IrisQualityBlock {
    fn record_length(&self) -> u32 {
        QUALITY_BLOCK_LEN
    }

    fn write_record<W: Write>(&self, out: &mut RecordWriter<W>) -> IrisResult<()> {
        out.write_u8(self.quality_score)?;
        out.write_u16(self.algorithm_vendor_id)?;
        out.write_u16(self.algorithm_id)
    }

    fn read_record<R: Read>(input: &mut RecordReader<R>, ctx: &mut DecodeContext) -> IrisResult<Self> {
        let block = Self {
            quality_score: input.read_u8("quality_score")?,
            algorithm_vendor_id: input.read_u16("quality_algorithm_vendor_id")?,
            algorithm_id: input.read_u16("quality_algorithm_id")?,
        };
        ctx.check(block.validate())?;
        ctx.counters_mut().add_quality_block();
        Ok(block)
    }

    fn read_image_info_only<R: Read>(
        input: &mut RecordReader<R>,
        ctx: &mut DecodeContext,
    ) -> IrisResult<Self> {
        input.skip(QUALITY_BLOCK_LEN, "quality_block")?;
        ctx.counters_mut().add_quality_block();
        Ok(Self::default())
    }
}

impl fmt::Display for IrisQualityBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quality(score={}, vendor=0x{:04x}, algorithm=0x{:04x})",
            self.quality_score, self.algorithm_vendor_id, self.algorithm_id
        )
    }
}
