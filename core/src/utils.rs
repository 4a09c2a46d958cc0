//! utils.rs
//! Small formatting helpers shared by the `Display` impls.

use std::fmt;
use num_enum::TryFromPrimitive;

/// Variant name for known registry values, hex for anything else.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

