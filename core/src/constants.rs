//! constants.rs
//! Field widths, fixed record sizes and registry sentinels for the iris
//! representation header (ISO/IEC 19794, iris representation header table).

/// Width of the leading total-length field.
pub const REPRESENTATION_LENGTH_LEN: u32 = 4;

/// Capture date and time: year (2) + month, day, hour, minute, second (1 each) + millisecond (2).
pub const CAPTURE_DATE_TIME_LEN: u32 = 9;

pub const DEVICE_TECHNOLOGY_LEN: u32 = 1;
pub const DEVICE_VENDOR_LEN: u32 = 2;
pub const DEVICE_TYPE_LEN: u32 = 2;
pub const QUALITY_BLOCK_COUNT_LEN: u32 = 1;
pub const REPRESENTATION_NUMBER_LEN: u32 = 2;

/// Bytes skipped by the image-information-only decode:
/// 9 (date/time) + 1 (technology) + 2 (vendor) + 2 (type).
pub const IMAGE_INFO_ONLY_SKIP_LEN: u32 =
    CAPTURE_DATE_TIME_LEN + DEVICE_TECHNOLOGY_LEN + DEVICE_VENDOR_LEN + DEVICE_TYPE_LEN;

/// One iris quality block: score (1) + algorithm vendor (2) + algorithm id (2).
pub const QUALITY_BLOCK_LEN: u32 = 5;

/// Image information block, exclusive of the image payload it describes.
pub const IMAGE_INFORMATION_LEN: u32 = 27;

/// Header size with no quality blocks: 4 + 9 + 1 + 2 + 2 + 1 + 2 + 27.
pub const MIN_REPRESENTATION_HEADER_LEN: u32 = REPRESENTATION_LENGTH_LEN
    + IMAGE_INFO_ONLY_SKIP_LEN
    + QUALITY_BLOCK_COUNT_LEN
    + REPRESENTATION_NUMBER_LEN
    + IMAGE_INFORMATION_LEN;

/// The quality block count is a single byte on the wire.
pub const MAX_QUALITY_BLOCKS: usize = u8::MAX as usize;

/// Capture date/time domains.
pub mod capture {
    pub const MIN_YEAR: u16 = 1;
    pub const MAX_YEAR: u16 = 9999;
    /// Zero-based month, as held in memory.
    pub const MAX_MONTH: u8 = 11;
    pub const MAX_DAY: u8 = 31;
    pub const MAX_HOUR: u8 = 23;
    pub const MAX_MINUTE: u8 = 59;
    pub const MAX_SECOND: u8 = 59;
    pub const MAX_MILLISECOND: u16 = 999;
}

/// Capture device technology identifiers.
pub mod technology_ids {
    pub const UNSPECIFIED: u8 = 0x00;
    pub const CMOS_CCD: u8 = 0x01;
}

/// Capture device vendor identifiers.
pub mod vendor_ids {
    pub const UNSPECIFIED: u16 = 0x0000;
    pub const FIRST_REGISTERED: u16 = 0x0001;
    pub const LAST_REGISTERED: u16 = 0xFFFE;
}

/// Capture device type identifiers.
pub mod type_ids {
    pub const UNSPECIFIED: u16 = 0x0000;
    pub const FIRST_ASSIGNED: u16 = 0x0001;
    pub const LAST_ASSIGNED: u16 = 0xFFFE;
}

/// Quality score domain.
pub mod quality {
    pub const MAX_SCORE: u8 = 100;
    pub const FAILED_TO_COMPUTE: u8 = 0xFF;
}
