use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::config::WEEK_START;

/// Current date from the browser clock. Everything below takes dates as
/// parameters so the date math stays clock-free and testable.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .expect("browser clock produced an invalid calendar date")
}

/// First date of the week containing `date`, per `WEEK_START`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset =
        (date.weekday().num_days_from_sunday() + 7 - WEEK_START.num_days_from_sunday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(date)
}

/// The 7 consecutive dates of the week containing `date`, ascending.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    (0..7)
        .filter_map(|i| start.checked_add_days(Days::new(i)))
        .collect()
}

/// The 24 hour labels of the time axis, "0:00" through "23:00".
pub fn hour_labels() -> Vec<String> {
    (0..24).map(|hour| format!("{}:00", hour)).collect()
}

/// Time string for a clicked hour slot. Zero-padded so slot times compare
/// consistently with stored event times.
pub fn slot_time(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Default end time for a new event: one hour after the start, capped at the
/// end of the day.
pub fn default_end_time(start_time: &str) -> String {
    match shared::parse_time(start_time) {
        Ok((hour, _)) if hour >= 23 => "23:59".to_string(),
        Ok((hour, minute)) => format!("{:02}:{:02}", hour + 1, minute),
        Err(_) => "10:00".to_string(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Full display form of a date, e.g. "June 16, 2025".
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// Label for a visible week, e.g. "June 15 – 21, 2025". Falls back to the
/// longer forms when the week crosses a month or year boundary.
pub fn format_week_range(days: &[NaiveDate]) -> String {
    let (first, last) = match (days.first(), days.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return String::new(),
    };

    if first.year() != last.year() {
        format!(
            "{} – {}",
            format_display_date(first),
            format_display_date(last)
        )
    } else if first.month() != last.month() {
        format!(
            "{} {} – {} {}, {}",
            month_name(first.month()),
            first.day(),
            month_name(last.month()),
            last.day(),
            last.year()
        )
    } else {
        format!(
            "{} {} – {}, {}",
            month_name(first.month()),
            first.day(),
            last.day(),
            last.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_week_dates_shape() {
        // A Monday, a Sunday and a Saturday all resolve to the same shape:
        // 7 consecutive ascending dates containing the input
        for input in [date(2025, 6, 16), date(2025, 6, 15), date(2025, 6, 21)] {
            let days = week_dates(input);
            assert_eq!(days.len(), 7);
            assert!(days.contains(&input));
            assert_eq!(days[0].weekday(), WEEK_START);
            for pair in days.windows(2) {
                assert_eq!(pair[1], pair[0].succ_opt().unwrap());
            }
        }
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // Monday June 16, 2025 belongs to the week of Sunday June 15
        assert_eq!(week_start(date(2025, 6, 16)), date(2025, 6, 15));
        // A Sunday is its own week start
        assert_eq!(week_start(date(2025, 6, 15)), date(2025, 6, 15));
        // Saturday is the last day of that same week
        assert_eq!(week_start(date(2025, 6, 21)), date(2025, 6, 15));
    }

    #[test]
    fn test_week_crosses_month_boundary() {
        let days = week_dates(date(2025, 7, 1));
        assert_eq!(days[0], date(2025, 6, 29));
        assert_eq!(days[6], date(2025, 7, 5));
    }

    #[test]
    fn test_hour_labels() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "0:00");
        assert_eq!(labels[9], "9:00");
        assert_eq!(labels[23], "23:00");
    }

    #[test]
    fn test_slot_time_is_zero_padded() {
        assert_eq!(slot_time(0), "00:00");
        assert_eq!(slot_time(9), "09:00");
        assert_eq!(slot_time(23), "23:00");
    }

    #[test]
    fn test_default_end_time() {
        assert_eq!(default_end_time("09:00"), "10:00");
        assert_eq!(default_end_time("09:30"), "10:30");
        // Late starts cap at end of day
        assert_eq!(default_end_time("23:00"), "23:59");
        // Unparseable input falls back to a sane default
        assert_eq!(default_end_time("whenever"), "10:00");
    }

    #[test]
    fn test_format_week_range() {
        assert_eq!(
            format_week_range(&week_dates(date(2025, 6, 16))),
            "June 15 – 21, 2025"
        );
        assert_eq!(
            format_week_range(&week_dates(date(2025, 7, 1))),
            "June 29 – July 5, 2025"
        );
        assert_eq!(
            format_week_range(&week_dates(date(2025, 12, 30))),
            "December 28, 2025 – January 3, 2026"
        );
    }
}
