use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// Midnight (UTC) of the day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Bounds of the Sunday-based calendar week containing `instant`, as `[start, end)`.
pub fn week_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let day_start = start_of_day(instant);
    let days_since_sunday = instant.weekday().num_days_from_sunday() as i64;
    let week_start = day_start - Duration::days(days_since_sunday);
    (week_start, week_start + Duration::days(7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    #[test]
    fn start_of_day_truncates_time() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 17, 14, 35, 12).unwrap();
        assert_eq!(start_of_day(instant), Utc.with_ymd_and_hms(2024, 1, 17, 0, 0, 0).unwrap());
    }

    #[test]
    fn week_starts_on_sunday() {
        // Wednesday
        let instant = Utc.with_ymd_and_hms(2024, 1, 17, 9, 0, 0).unwrap();
        let (start, end) = week_bounds(instant);

        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn sunday_is_its_own_week_start() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 14, 23, 59, 0).unwrap();
        let (start, _) = week_bounds(instant);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap());
    }
}
