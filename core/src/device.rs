//! device.rs
//! Capture device registries: technology, vendor and type identifiers.
//!
//! Every registry has an "unspecified" sentinel (0) that is always accepted.
//! `verify` reports anything else outside the known set as
//! `UnknownEnumerationValue`; decode downgrades that to a diagnostic,
//! construction (`require_known`) turns it into `InvalidField`.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{technology_ids, type_ids, vendor_ids};
use crate::types::{IrisError, IrisResult};

pub const TECHNOLOGY_FIELD: &str = "capture_device_technology_id";
pub const VENDOR_FIELD: &str = "capture_device_vendor_id";
pub const TYPE_FIELD: &str = "capture_device_type_id";

/// A closed identifier domain with an unspecified sentinel.
pub trait Registry {
    type Raw: Copy + PartialEq + Into<u32> + Into<i64>;

    const FIELD: &'static str;
    const UNSPECIFIED: Self::Raw;

    /// Registered values, sentinel excluded.
    fn is_registered(raw: Self::Raw) -> bool;

    /// Registered values plus the sentinel.
    fn is_known(raw: Self::Raw) -> bool {
        raw == Self::UNSPECIFIED || Self::is_registered(raw)
    }

    fn verify(raw: Self::Raw) -> IrisResult<()> {
        if Self::is_known(raw) {
            Ok(())
        } else {
            Err(IrisError::unknown(Self::FIELD, raw))
        }
    }

    /// Strict form used by record construction.
    fn require_known(raw: Self::Raw) -> IrisResult<()> {
        if Self::is_known(raw) {
            Ok(())
        } else {
            Err(IrisError::invalid(Self::FIELD, raw, "not a registered identifier"))
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, Serialize, Deserialize)]
pub enum CaptureDeviceTechnology {
    Unspecified = technology_ids::UNSPECIFIED,
    CmosCcd     = technology_ids::CMOS_CCD,
}

impl Registry for CaptureDeviceTechnology {
    type Raw = u8;
    const FIELD: &'static str = TECHNOLOGY_FIELD;
    const UNSPECIFIED: u8 = technology_ids::UNSPECIFIED;

    fn is_registered(raw: u8) -> bool {
        CaptureDeviceTechnology::try_from_primitive(raw).is_ok()
    }
}

/// Vendor identifiers are organisation ids from the biometric registration
/// authority; `0xFFFF` is reserved and never assigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CaptureDeviceVendor;

impl Registry for CaptureDeviceVendor {
    type Raw = u16;
    const FIELD: &'static str = VENDOR_FIELD;
    const UNSPECIFIED: u16 = vendor_ids::UNSPECIFIED;

    fn is_registered(raw: u16) -> bool {
        (vendor_ids::FIRST_REGISTERED..=vendor_ids::LAST_REGISTERED).contains(&raw)
    }
}

/// Type identifiers are assigned by each vendor; `0xFFFF` is reserved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CaptureDeviceType;

impl Registry for CaptureDeviceType {
    type Raw = u16;
    const FIELD: &'static str = TYPE_FIELD;
    const UNSPECIFIED: u16 = type_ids::UNSPECIFIED;

    fn is_registered(raw: u16) -> bool {
        (type_ids::FIRST_ASSIGNED..=type_ids::LAST_ASSIGNED).contains(&raw)
    }
}

/// The three device identifiers carried by a representation header.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureDevice {
    pub technology_id: u8,
    pub vendor_id: u16,
    pub type_id: u16,
}

impl CaptureDevice {
    /// All three identifiers set to the sentinel.
    pub const fn unspecified() -> Self {
        Self {
            technology_id: technology_ids::UNSPECIFIED,
            vendor_id: vendor_ids::UNSPECIFIED,
            type_id: type_ids::UNSPECIFIED,
        }
    }

    /// Builds a device triple, rejecting identifiers outside their registries.
    pub fn new(technology_id: u8, vendor_id: u16, type_id: u16) -> IrisResult<Self> {
        CaptureDeviceTechnology::require_known(technology_id)?;
        CaptureDeviceVendor::require_known(vendor_id)?;
        CaptureDeviceType::require_known(type_id)?;
        Ok(Self { technology_id, vendor_id, type_id })
    }

    pub fn is_unspecified(&self) -> bool {
        *self == Self::unspecified()
    }

    pub fn technology(&self) -> Option<CaptureDeviceTechnology> {
        CaptureDeviceTechnology::try_from_primitive(self.technology_id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_always_known() {
        CaptureDeviceTechnology::verify(0).unwrap();
        CaptureDeviceVendor::verify(0).unwrap();
        CaptureDeviceType::verify(0).unwrap();
    }

    #[test]
    fn sentinel_is_not_a_registered_vendor_or_type() {
        assert!(!CaptureDeviceVendor::is_registered(CaptureDeviceVendor::UNSPECIFIED));
        assert!(!CaptureDeviceType::is_registered(CaptureDeviceType::UNSPECIFIED));
        assert!(CaptureDeviceVendor::is_known(CaptureDeviceVendor::UNSPECIFIED));
    }

    #[test]
    fn reserved_vendor_is_unknown() {
        let err = CaptureDeviceVendor::verify(0xFFFF).unwrap_err();
        assert!(matches!(
            err,
            IrisError::UnknownEnumerationValue { field: VENDOR_FIELD, raw: 0xFFFF }
        ));
    }

    #[test]
    fn require_known_is_invalid_field() {
        let err = CaptureDeviceTechnology::require_known(0x7F).unwrap_err();
        assert!(matches!(
            err,
            IrisError::InvalidField { field: TECHNOLOGY_FIELD, value: 0x7F, .. }
        ));
    }

    #[test]
    fn capture_device_new_validates_each_id() {
        let dev = CaptureDevice::new(1, 0x0101, 0x0002).unwrap();
        assert_eq!(dev.technology(), Some(CaptureDeviceTechnology::CmosCcd));
        assert!(!dev.is_unspecified());

        assert!(CaptureDevice::new(1, 0xFFFF, 1).is_err());
        assert!(CaptureDevice::new(1, 1, 0xFFFF).is_err());
        assert!(CaptureDevice::new(9, 1, 1).is_err());
        assert!(CaptureDevice::unspecified().is_unspecified());
    }
}
