//! image_info.rs
//! Image information block: geometry and encoding of the attached iris image.
//!
//! Layout (27 bytes, big-endian). The image payload itself is not part of it.
//!
//! ```text
//! [ eye label (1) ] [ image type (1) ] [ image format (1) ] [ properties (1) ]
//! [ width (2) ] [ height (2) ] [ bit depth (1) ]
//! [ range (2) ] [ roll angle (2) ] [ roll angle uncertainty (2) ]
//! [ iris centre smallest X (2) ] [ largest X (2) ] [ smallest Y (2) ] [ largest Y (2) ]
//! [ iris diameter smallest (2) ] [ largest (2) ]
//! ```
//!
//! Image-information-only decode reads the first seven fields (9 bytes) and
//! skips the remaining 18.

use std::fmt;
use std::io::{Read, Write};

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::codec::{DecodeContext, IrisRecord, RecordReader, RecordWriter};
use crate::constants::IMAGE_INFORMATION_LEN;
use crate::device::Registry;
use crate::types::IrisResult;
use crate::utils::enum_name_or_hex;

/// Bytes materialized by the image-information-only decode.
const GEOMETRY_LEN: u32 = 1 + 1 + 1 + 1 + 2 + 2 + 1;

pub const EYE_LABEL_FIELD: &str = "eye_label";

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, Serialize, Deserialize)]
pub enum EyeLabel {
    Unspecified = 0x00,
    Right       = 0x01,
    Left        = 0x02,
}

impl Registry for EyeLabel {
    type Raw = u8;
    const FIELD: &'static str = EYE_LABEL_FIELD;
    const UNSPECIFIED: u8 = EyeLabel::Unspecified as u8;

    fn is_registered(raw: u8) -> bool {
        EyeLabel::try_from_primitive(raw).is_ok()
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, Serialize, Deserialize)]
pub enum ImageType {
    Uncropped        = 0x01,
    Vga              = 0x02,
    Cropped          = 0x03,
    CroppedAndMasked = 0x07,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, Serialize, Deserialize)]
pub enum ImageFormat {
    MonoRaw      = 0x02,
    MonoJpeg2000 = 0x0A,
    MonoPng      = 0x0E,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageInformation {
    pub eye_label: u8,
    pub image_type: u8,
    pub image_format: u8,
    /// Bits 0–1 horizontal orientation, 2–3 vertical orientation, 4–5 compression history.
    pub image_properties: u8,
    pub width: u16,
    pub height: u16,
    pub bit_depth: u8,
    pub range: u16,
    pub roll_angle_of_eye: u16,
    pub roll_angle_uncertainty: u16,
    pub iris_center_smallest_x: u16,
    pub iris_center_largest_x: u16,
    pub iris_center_smallest_y: u16,
    pub iris_center_largest_y: u16,
    pub iris_diameter_smallest: u16,
    pub iris_diameter_largest: u16,
}

impl ImageInformation {
    /// Geometry-only block; every other field is zero (unspecified).
    pub fn with_geometry(
        eye: EyeLabel,
        image_type: ImageType,
        image_format: ImageFormat,
        width: u16,
        height: u16,
        bit_depth: u8,
    ) -> Self {
        Self {
            eye_label: eye as u8,
            image_type: image_type as u8,
            image_format: image_format as u8,
            width,
            height,
            bit_depth,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> IrisResult<()> {
        EyeLabel::require_known(self.eye_label)
    }

    pub fn eye(&self) -> Option<EyeLabel> {
        EyeLabel::try_from_primitive(self.eye_label).ok()
    }

    pub fn image_type_kind(&self) -> Option<ImageType> {
        ImageType::try_from_primitive(self.image_type).ok()
    }

    pub fn image_format_kind(&self) -> Option<ImageFormat> {
        ImageFormat::try_from_primitive(self.image_format).ok()
    }

    pub fn horizontal_orientation(&self) -> u8 {
        self.image_properties & 0b11
    }

    pub fn vertical_orientation(&self) -> u8 {
        (self.image_properties >> 2) & 0b11
    }

    pub fn compression_history(&self) -> u8 {
        (self.image_properties >> 4) & 0b11
    }

    /// Packs the three 2-bit property fields; higher bits of each input are dropped.
    pub fn set_image_properties(&mut self, horizontal: u8, vertical: u8, compression: u8) {
        self.image_properties = (horizontal & 0b11) | ((vertical & 0b11) << 2) | ((compression & 0b11) << 4);
    }

    fn read_geometry<R: Read>(input: &mut RecordReader<R>) -> IrisResult<Self> {
        Ok(Self {
            eye_label: input.read_u8("eye_label")?,
            image_type: input.read_u8("image_type")?,
            image_format: input.read_u8("image_format")?,
            image_properties: input.read_u8("image_properties")?,
            width: input.read_u16("image_width")?,
            height: input.read_u16("image_height")?,
            bit_depth: input.read_u8("image_bit_depth")?,
            ..Default::default()
        })
    }
}

impl IrisRecord for ImageInformation {
    fn record_length(&self) -> u32 {
        IMAGE_INFORMATION_LEN
    }

    fn write_record<W: Write>(&self, out: &mut RecordWriter<W>) -> IrisResult<()> {
        out.write_u8(self.eye_label)?;
        out.write_u8(self.image_type)?;
        out.write_u8(self.image_format)?;
        out.write_u8(self.image_properties)?;
        out.write_u16(self.width)?;
        out.write_u16(self.height)?;
        out.write_u8(self.bit_depth)?;
        out.write_u16(self.range)?;
        out.write_u16(self.roll_angle_of_eye)?;
        out.write_u16(self.roll_angle_uncertainty)?;
        out.write_u16(self.iris_center_smallest_x)?;
        out.write_u16(self.iris_center_largest_x)?;
        out.write_u16(self.iris_center_smallest_y)?;
        out.write_u16(self.iris_center_largest_y)?;
        out.write_u16(self.iris_diameter_smallest)?;
        out.write_u16(self.iris_diameter_largest)
    }

    fn read_record<R: Read>(input: &mut RecordReader<R>, ctx: &mut DecodeContext) -> IrisResult<Self> {
        let mut info = Self::read_geometry(input)?;
        ctx.check(EyeLabel::verify(info.eye_label))?;

        info.range = input.read_u16("image_range")?;
        info.roll_angle_of_eye = input.read_u16("roll_angle_of_eye")?;
        info.roll_angle_uncertainty = input.read_u16("roll_angle_uncertainty")?;
        info.iris_center_smallest_x = input.read_u16("iris_center_smallest_x")?;
        info.iris_center_largest_x = input.read_u16("iris_center_largest_x")?;
        info.iris_center_smallest_y = input.read_u16("iris_center_smallest_y")?;
        info.iris_center_largest_y = input.read_u16("iris_center_largest_y")?;
        info.iris_diameter_smallest = input.read_u16("iris_diameter_smallest")?;
        info.iris_diameter_largest = input.read_u16("iris_diameter_largest")?;
        Ok(info)
    }

    fn read_image_info_only<R: Read>(
        input: &mut RecordReader<R>,
        ctx: &mut DecodeContext,
    ) -> IrisResult<Self> {
        let info = Self::read_geometry(input)?;
        ctx.check(EyeLabel::verify(info.eye_label))?;
        input.skip(IMAGE_INFORMATION_LEN - GEOMETRY_LEN, "image_information")?;
        Ok(info)
    }
}

impl fmt::Display for ImageInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image(eye={}, type={}, format={}, {}x{}x{}, iris_diameter={}..{})",
            enum_name_or_hex::<EyeLabel>(self.eye_label),
            enum_name_or_hex::<ImageType>(self.image_type),
            enum_name_or_hex::<ImageFormat>(self.image_format),
            self.width,
            self.height,
            self.bit_depth,
            self.iris_diameter_smallest,
            self.iris_diameter_largest
        )
    }
}
