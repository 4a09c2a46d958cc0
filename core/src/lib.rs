//! iris-core
//!
//! Byte-exact codec for the ISO/IEC 19794 iris representation header.
//! Pure Rust, synchronous, no I/O beyond the `Read`/`Write` handed in by the caller.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Wire plumbing
pub mod codec;
pub mod telemetry;

// Field registries and sub-records
pub mod datetime;
pub mod device;
pub mod image_info;
pub mod quality;

// Representation header
pub mod headers;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{DecodeOptions, Decoded, EnumerationPolicy, IrisRecord};
    pub use crate::datetime::CaptureDateTime;
    pub use crate::device::{CaptureDeviceTechnology, CaptureDeviceType, CaptureDeviceVendor, Registry};
    pub use crate::headers::RepresentationHeader;
    pub use crate::image_info::{EyeLabel, ImageInformation};
    pub use crate::quality::IrisQualityBlock;
    pub use crate::types::{Diagnostic, IrisError, IrisResult};
}
