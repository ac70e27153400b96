//! Market open/closed derivation from wall-clock time.

use chrono::{Datelike, Local, NaiveTime, Timelike, Weekday};

use crate::config::constants::{MARKET_CLOSE_MINUTES, MARKET_OPEN_MINUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketStatus {
    Open,
    Closed,
}

impl MarketStatus {
    pub fn is_open(self) -> bool {
        self == MarketStatus::Open
    }
}

/// Regular-session classification: Open iff Mon-Fri and the local time falls
/// in [09:30, 16:00). Local wall clock only; exchange holidays and timezone
/// conversion are out of scope, mirroring the original dashboard.
pub fn market_status(weekday: Weekday, time: NaiveTime) -> MarketStatus {
    let is_weekday = !matches!(weekday, Weekday::Sat | Weekday::Sun);
    let minutes = time.hour() * 60 + time.minute();
    let in_session = minutes >= MARKET_OPEN_MINUTES && minutes < MARKET_CLOSE_MINUTES;

    if is_weekday && in_session {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    }
}

/// Classify using the current local time.
pub fn market_status_now() -> MarketStatus {
    let now = Local::now();
    market_status(now.weekday(), now.time())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn midweek_morning_is_open() {
        assert_eq!(market_status(Weekday::Wed, at(10, 0)), MarketStatus::Open);
    }

    #[test]
    fn session_boundaries() {
        assert_eq!(market_status(Weekday::Mon, at(9, 29)), MarketStatus::Closed);
        assert_eq!(market_status(Weekday::Mon, at(9, 30)), MarketStatus::Open);
        assert_eq!(market_status(Weekday::Fri, at(15, 59)), MarketStatus::Open);
        assert_eq!(market_status(Weekday::Fri, at(16, 0)), MarketStatus::Closed);
    }

    #[test]
    fn evenings_are_closed_on_any_weekday() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            assert_eq!(market_status(day, at(17, 0)), MarketStatus::Closed);
        }
    }

    #[test]
    fn weekends_are_closed() {
        assert_eq!(market_status(Weekday::Sat, at(10, 0)), MarketStatus::Closed);
        assert_eq!(market_status(Weekday::Sun, at(10, 0)), MarketStatus::Closed);
    }
}
