//! Human-readable data formatting utilities.
//!
//! This module provides functions for formatting image sizes, timestamps and
//! tag lists into user-friendly strings for tabular output.

use crate::model::ZERO_TIMESTAMP;
use chrono::{DateTime, Local, TimeZone, Utc};
use humansize::{BINARY, format_size as format_size_human};
use std::fmt::Display;


/// Placeholder shown for values the registry did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown for an image without tags.
pub const UNTAGGED: &str = "<none>";

/// Formats a byte size into a human-readable string using binary units (KiB, MiB).
///
/// # Examples
///
/// ```
/// use libecr::format::format_size;
///
/// let size = 1024 * 1024 * 5; // 5 MiB
/// assert_eq!(format_size(size), "5 MiB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    format_size_human(size_bytes, BINARY)
}

/// Formats a timestamp in the local time zone.
///
/// The zero timestamp stands for "not reported" and is shown as `N/A`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Formats a timestamp in the given time zone as `YYYY-MM-DD HH:MM:SS +ZZZZ`.
///
/// # Examples
///
/// ```
/// use libecr::format::format_timestamp_in;
/// use chrono::{DateTime, Utc};
///
/// let ts = DateTime::from_timestamp(1500532805, 0).unwrap();
/// assert_eq!(format_timestamp_in(&ts, &Utc), "2017-07-20 06:40:05 +0000");
/// ```
pub fn format_timestamp_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if *timestamp == ZERO_TIMESTAMP {
        return NOT_AVAILABLE.to_string();
    }

    timestamp
        .with_timezone(tz)
        .format("%Y-%m-%d %H:%M:%S %z")
        .to_string()
}

/// Joins tags with commas, or returns `<none>` for an untagged image.
///
/// # Examples
///
/// ```
/// use libecr::format::format_tags;
///
/// assert_eq!(format_tags(&["latest".to_string(), "v1".to_string()]), "latest,v1");
/// assert_eq!(format_tags(&[]), "<none>");
/// ```
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        UNTAGGED.to_string()
    } else {
        tags.join(",")
    }
}
