use chrono::Duration as ChronoDuration;

/// Rounds to the nearest tenth, halves away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole-number percentage of `made` over `eligible`, `None` when nothing was eligible.
#[must_use]
pub fn pct(made: u32, eligible: u32) -> Option<u32> {
    if eligible == 0 {
        return None;
    }
    let value = (f64::from(made) / f64::from(eligible) * 100.0).round();
    // made <= eligible in every caller, so this stays within 0..=100
    Some(value as u32)
}

#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;
    const YEAR: i64 = 365 * DAY;

    let (count, unit) = if secs >= YEAR {
        (secs / YEAR, "year")
    } else if secs >= WEEK {
        (secs / WEEK, "week")
    } else if secs >= DAY {
        (secs / DAY, "day")
    } else if secs >= HOUR {
        (secs / HOUR, "hour")
    } else if secs >= MINUTE {
        (secs / MINUTE, "minute")
    } else {
        (secs, "second")
    };

    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_and_pct() {
        assert_eq!(round1(1.666), 1.7);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(4.0), 4.0);
        assert_eq!(pct(0, 0), None);
        assert_eq!(pct(1, 3), Some(33));
        assert_eq!(pct(2, 3), Some(67));
        assert_eq!(pct(3, 3), Some(100));
    }

    #[test]
    fn test_format_time_ago() {
        assert_eq!(format_time_ago(ChronoDuration::seconds(-5)), "0 seconds");
        assert_eq!(format_time_ago(ChronoDuration::minutes(1)), "1 minute");
        assert_eq!(format_time_ago(ChronoDuration::hours(5)), "5 hours");
        assert_eq!(format_time_ago(ChronoDuration::days(1)), "1 day");
        assert_eq!(format_time_ago(ChronoDuration::days(15)), "2 weeks");
    }
}
