//! datetime.rs
//! Capture date and time of a representation.
//!
//! The seven discrete fields are authoritative; a `chrono` instant is only
//! ever derived from them. All conversions are Gregorian and in UTC, so the
//! result never depends on the host time zone or locale.
//!
//! The month is held zero-based (0 = January). The wire carries it one-based;
//! the shift happens in `write_to` / `read_from` and nowhere else.

use std::fmt;
use std::io::{Read, Write};

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{RecordReader, RecordWriter};
use crate::constants::capture;
use crate::types::{IrisError, IrisResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureDateTime {
    pub year: u16,
    /// Zero-based month (0–11).
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl CaptureDateTime {
    /// Decomposes a UTC instant into the discrete wire fields.
    pub fn from_instant(instant: &DateTime<Utc>) -> IrisResult<Self> {
        let year = instant.year();
        if year < i32::from(capture::MIN_YEAR) || year > i32::from(capture::MAX_YEAR) {
            return Err(IrisError::invalid("capture_year", year, "outside 1..=9999"));
        }

        let dt = Self {
            year: year as u16,
            month: instant.month0() as u8,
            day: instant.day() as u8,
            hour: instant.hour() as u8,
            minute: instant.minute() as u8,
            second: instant.second() as u8,
            // A leap second reports 1000..=1999 here and is rejected by validate().
            millisecond: instant.timestamp_subsec_millis() as u16,
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Recomposes the instant, or `None` if the fields do not name a real date.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month) + 1,
            u32::from(self.day),
        )?;
        let time = NaiveTime::from_hms_milli_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            u32::from(self.millisecond),
        )?;
        Some(date.and_time(time).and_utc())
    }

    /// Fail-fast domain check used on construction.
    pub fn validate(&self) -> IrisResult<()> {
        self.field_checks().into_iter().collect()
    }

    /// One verdict per field, in wire order.
    ///
    /// Decode feeds each verdict to the enumeration policy separately so that
    /// every out-of-domain field is reported, not only the first. The month is
    /// reported with its one-based wire value.
    pub fn field_checks(&self) -> [IrisResult<()>; 7] {
        [
            self.check_year(),
            self.check_month(),
            self.check_day(),
            check_max("capture_hour", self.hour, capture::MAX_HOUR, "outside 0..=23"),
            check_max("capture_minute", self.minute, capture::MAX_MINUTE, "outside 0..=59"),
            check_max("capture_second", self.second, capture::MAX_SECOND, "outside 0..=59"),
            check_max("capture_millisecond", self.millisecond, capture::MAX_MILLISECOND, "outside 0..=999"),
        ]
    }

    fn check_year(&self) -> IrisResult<()> {
        if !(capture::MIN_YEAR..=capture::MAX_YEAR).contains(&self.year) {
            return Err(IrisError::invalid("capture_year", self.year, "outside 1..=9999"));
        }
        Ok(())
    }

    fn check_month(&self) -> IrisResult<()> {
        if self.month > capture::MAX_MONTH {
            return Err(IrisError::invalid("capture_month", self.wire_month(), "outside 1..=12"));
        }
        Ok(())
    }

    /// Checks against the real month length when year and month are usable,
    /// against 1..=31 otherwise.
    fn check_day(&self) -> IrisResult<()> {
        let in_month = if self.check_year().is_ok() && self.check_month().is_ok() {
            NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month) + 1, u32::from(self.day)).is_some()
        } else {
            (1..=capture::MAX_DAY).contains(&self.day)
        };
        if self.day == 0 || !in_month {
            return Err(IrisError::invalid("capture_day", self.day, "not a day of the month"));
        }
        Ok(())
    }

    /// One-based month as carried on the wire.
    pub fn wire_month(&self) -> u8 {
        self.month.wrapping_add(1)
    }

    pub(crate) fn write_to<W: Write>(&self, out: &mut RecordWriter<W>) -> IrisResult<()> {
        out.write_u16(self.year)?;
        out.write_u8(self.wire_month())?;
        out.write_u8(self.day)?;
        out.write_u8(self.hour)?;
        out.write_u8(self.minute)?;
        out.write_u8(self.second)?;
        out.write_u16(self.millisecond)
    }

    /// Reads the nine timestamp bytes without validating them.
    ///
    /// The month shift wraps so that any wire byte, 0 included, encodes back unchanged.
    pub(crate) fn read_from<R: Read>(input: &mut RecordReader<R>) -> IrisResult<Self> {
        Ok(Self {
            year: input.read_u16("capture_year")?,
            month: input.read_u8("capture_month")?.wrapping_sub(1),
            day: input.read_u8("capture_day")?,
            hour: input.read_u8("capture_hour")?,
            minute: input.read_u8("capture_minute")?,
            second: input.read_u8("capture_second")?,
            millisecond: input.read_u16("capture_millisecond")?,
        })
    }
}

fn check_max<T>(field: &'static str, value: T, max: T, reason: &'static str) -> IrisResult<()>
where
    T: PartialOrd + Into<i64>,
{
    if value > max {
        return Err(IrisError::invalid(field, value, reason));
    }
    Ok(())
}

impl fmt::Display for CaptureDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year,
            self.wire_month(),
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond
        )
    }
}
