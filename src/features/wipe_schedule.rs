// Wipe tracking
//
// The game server wipes on a fixed monthly schedule. `WipeInfo` answers the
// three questions the `wipe` command and `{days.untilwipe}` need.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Date format used in wipe replies, e.g. "Thursday, 05 November 2026"
pub const WIPE_DATE_FORMAT: &str = "%A, %d %B %Y";

pub trait WipeInfo: Send + Sync {
    fn next_wipe(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>>;

    fn current_wipe(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>>;

    /// Whole days left until the next wipe
    fn days_till_wipe(&self, now: DateTime<Utc>) -> Option<i64> {
        self.next_wipe(now).map(|next| (next - now).num_days())
    }
}

/// Forced wipe on the first `weekday` of every month at `hour` UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedWipeSchedule {
    #[serde(rename = "Weekday", default = "default_weekday")]
    pub weekday: Weekday,
    #[serde(rename = "Hour (UTC)", default = "default_hour")]
    pub hour: u32,
}

fn default_weekday() -> Weekday {
    Weekday::Thu
}

fn default_hour() -> u32 {
    19
}

impl Default for ForcedWipeSchedule {
    fn default() -> Self {
        Self {
            weekday: default_weekday(),
            hour: default_hour(),
        }
    }
}

impl ForcedWipeSchedule {
    fn wipe_in_month(&self, year: i32, month: u32) -> Option<DateTime<Utc>> {
        let day = NaiveDate::from_weekday_of_month_opt(year, month, self.weekday, 1)?;
        let time = NaiveTime::from_hms_opt(self.hour.min(23), 0, 0)?;
        Some(day.and_time(time).and_utc())
    }

    fn wipe_in_offset_month(&self, now: DateTime<Utc>, offset: i32) -> Option<DateTime<Utc>> {
        let months = now.year() * 12 + now.month0() as i32 + offset;
        self.wipe_in_month(months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
    }
}

impl WipeInfo for ForcedWipeSchedule {
    fn next_wipe(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let this_month = self.wipe_in_offset_month(now, 0)?;
        if this_month > now {
            Some(this_month)
        } else {
            self.wipe_in_offset_month(now, 1)
        }
    }

    fn current_wipe(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let this_month = self.wipe_in_offset_month(now, 0)?;
        if this_month <= now {
            Some(this_month)
        } else {
            self.wipe_in_offset_month(now, -1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_mid_month() {
        let schedule = ForcedWipeSchedule::default();
        let now = at(2026, 10, 16, 12);
        assert_eq!(schedule.current_wipe(now), Some(at(2026, 10, 1, 19)));
        assert_eq!(schedule.next_wipe(now), Some(at(2026, 11, 5, 19)));
        assert_eq!(schedule.days_till_wipe(now), Some(20));
    }

    #[test]
    fn test_wipe_day_before_and_at_wipe_hour() {
        let schedule = ForcedWipeSchedule::default();

        let before = at(2026, 10, 1, 18);
        assert_eq!(schedule.current_wipe(before), Some(at(2026, 9, 3, 19)));
        assert_eq!(schedule.next_wipe(before), Some(at(2026, 10, 1, 19)));
        assert_eq!(schedule.days_till_wipe(before), Some(0));

        let at_wipe = at(2026, 10, 1, 19);
        assert_eq!(schedule.current_wipe(at_wipe), Some(at_wipe));
        assert_eq!(schedule.next_wipe(at_wipe), Some(at(2026, 11, 5, 19)));
    }

    #[test]
    fn test_year_boundaries() {
        let schedule = ForcedWipeSchedule::default();
        assert_eq!(schedule.next_wipe(at(2026, 12, 20, 0)), Some(at(2027, 1, 7, 19)));
        assert_eq!(schedule.current_wipe(at(2027, 1, 2, 0)), Some(at(2026, 12, 3, 19)));
    }

    #[test]
    fn test_date_format() {
        let next = at(2026, 11, 5, 19);
        assert_eq!(next.format(WIPE_DATE_FORMAT).to_string(), "Thursday, 05 November 2026");
    }

    #[test]
    fn test_config_keys() {
        let schedule: ForcedWipeSchedule =
            serde_json::from_str(r#"{"Weekday": "Friday", "Hour (UTC)": 14}"#).unwrap();
        assert_eq!(schedule.weekday, Weekday::Fri);
        assert_eq!(schedule.hour, 14);

        let defaults: ForcedWipeSchedule = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, ForcedWipeSchedule::default());
    }
}
