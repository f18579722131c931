use chrono::{Local, TimeZone};
use thiserror::Error;

use crate::model::HostRecord;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("body is not a JSON string: {0}")]
    Outer(#[source] serde_json::Error),
    #[error("embedded payload is not a host array: {0}")]
    Inner(#[source] serde_json::Error),
}

/// Decodes a host-list response body.
///
/// The backend double-encodes list responses: the HTTP body is a JSON string
/// which itself contains the JSON array of host tuples. Decoding is two
/// sequential steps, and a single-encoded body is an error. Do not "fix"
/// this client-side; it is the wire format as served.
pub fn decode_hosts(body: &str) -> Result<Vec<HostRecord>, WireError> {
    let inner: String = serde_json::from_str(body).map_err(WireError::Outer)?;
    serde_json::from_str(&inner).map_err(WireError::Inner)
}

/// Renders a last-change timestamp as `DD/MM/YYYY  HH:MM:SS` (two spaces
/// between date and time, all fields zero-padded) in the given time zone.
pub fn format_changed_at_in<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(epoch_seconds, 0)
        .single()
        .map(|dt| dt.format("%d/%m/%Y  %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// `format_changed_at_in` in the local time zone, as shown in the table.
pub fn format_changed_at(epoch_seconds: i64) -> String {
    format_changed_at_in(epoch_seconds, &Local)
}
