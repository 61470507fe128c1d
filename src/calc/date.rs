use chrono::{DateTime, NaiveDate};

/// Lenient encodings tried last, behind the numeric guard.
const FALLBACK_FORMATS: &[&str] = &["%d-%m-%Y", "%Y/%m/%d"];

/// Normalize a raw date string into a calendar date.
///
/// The store carries dates as text in whichever encoding they were entered
/// with, so every read goes through this chain: day-first slashes, ISO
/// dashes, a full timestamp (date portion kept), then a couple of lenient
/// fallbacks. First match wins. Absent, blank, or unparseable input yields
/// `None` rather than an error; a dateless bill is a valid business state.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    // A purely numeric string ("20240615") is never a date in the remaining
    // encodings; without this guard a lenient parse could invent one.
    if s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    for fmt in FALLBACK_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}
