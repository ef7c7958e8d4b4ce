//! Time related utils.
//!
//! All timestamps are UTC. Signers take the time once per request and format it
//! from that single value.

use chrono::Utc;

/// DateTime is the UTC timestamp used across cdpsign.
pub type DateTime = chrono::DateTime<Utc>;

/// Create the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into RFC 1123 with a literal `GMT` zone: `Thu, 01 Jan 1970 00:00:00 GMT`.
///
/// This is the form of the `x-altus-date` header.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an RFC 1123 date as produced by [`format_http_date`].
pub fn parse_http_date(s: &str) -> crate::Result<DateTime> {
    let t = chrono::NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT").map_err(|e| {
        crate::Error::unexpected(format!("parse '{s}' into http date failed")).with_source(e)
    })?;
    Ok(t.and_utc())
}
