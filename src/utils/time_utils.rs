use chrono::{DateTime, Local, Locale, NaiveDate, TimeZone};

/// Monotonic clock that also works on wasm32.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    /// "15 октября 2026"
    pub const LONG_DATE_FORMAT: &str = "%-d %B %Y";
    /// "15.10.2026 21:40"
    pub const HISTORY_STAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
}

pub fn now_timestamp_ms() -> i64 {
    Local::now().timestamp_millis()
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Long Russian date used inside the prompt.
pub fn long_date_ru(date: NaiveDate) -> String {
    date.format_localized(TimeUtils::LONG_DATE_FORMAT, Locale::ru_RU)
        .to_string()
}

/// Local wall-clock rendering of an epoch-millis stamp, for the history list.
/// Returns an empty string for stamps chrono can't represent.
pub fn epoch_ms_to_local_string(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => format_local(&dt),
        None => String::new(),
    }
}

fn format_local(dt: &DateTime<Local>) -> String {
    dt.format(TimeUtils::HISTORY_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_contains_day_and_year() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let s = long_date_ru(d);
        assert!(s.starts_with("15 "), "got {s}");
        assert!(s.ends_with(" 2026"), "got {s}");
        assert!(!s.contains("October"), "got {s}");
    }

    #[test]
    fn unrepresentable_stamp_renders_empty() {
        assert_eq!(epoch_ms_to_local_string(i64::MAX), "");
        assert!(!epoch_ms_to_local_string(0).is_empty());
    }
}
