use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Current local time as an RFC 3339 timestamp with microseconds and offset.
pub fn now_iso() -> String {
    format_iso(&Local::now())
}

pub fn format_iso(at: &DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn parse_iso(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
}
