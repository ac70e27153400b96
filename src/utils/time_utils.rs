use chrono::{DateTime, Local, NaiveDate};

pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a backend date string (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, STANDARD_DATE_FORMAT).ok()
}

/// The synthesized x-axis date for the one-day-ahead prediction point.
pub fn next_day_string(last_date: &str) -> Option<String> {
    let date = parse_date(last_date)?;
    date.succ_opt()
        .map(|next| next.format(STANDARD_DATE_FORMAT).to_string())
}

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

/// Wall-clock stamp for the "last updated" widget.
pub fn format_local_time(dt: DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_day_simple() {
        assert_eq!(next_day_string("2024-03-14").as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn next_day_crosses_month_and_year() {
        assert_eq!(next_day_string("2024-02-29").as_deref(), Some("2024-03-01"));
        assert_eq!(next_day_string("2024-12-31").as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert_eq!(next_day_string("not-a-date"), None);
        assert_eq!(next_day_string(""), None);
    }
}
