//! Text formatting for phone numbers, dates and ages.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Groups a raw phone number from the right: `###-####`, with a 3-digit
/// area code once the value reaches 10^7 and a `+N` country prefix once it
/// reaches 10^10.
pub fn phone_number(phone: u64) -> String {
    let line = phone % 10_000;
    let exchange = phone / 10_000 % 1_000;
    let mut text = format!("{:03}-{:04}", exchange, line);

    let area = phone / 10_000_000 % 1_000;
    if area != 0 {
        text = format!("{:03}-{}", area, text);
    }

    let country = phone / 10_000_000_000;
    if country != 0 {
        text = format!("+{} {}", country, text);
    }
    text
}

/// Calendar-aware difference between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateDiff {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

fn days_in_month(year: i32, month: u32) -> i32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(end)) => (end - start).num_days() as i32,
        _ => 31,
    }
}

/// Field-wise difference `b - a` with borrows carried upward. The earlier
/// instant is always subtracted from the later one. A day borrow adds the
/// length of the earlier instant's month.
pub fn date_diff(a: NaiveDateTime, b: NaiveDateTime) -> DateDiff {
    let (a, b) = if a > b { (b, a) } else { (a, b) };

    let mut diff = DateDiff {
        years: b.year() - a.year(),
        months: b.month() as i32 - a.month() as i32,
        days: b.day() as i32 - a.day() as i32,
        hours: b.hour() as i32 - a.hour() as i32,
        minutes: b.minute() as i32 - a.minute() as i32,
        seconds: b.second() as i32 - a.second() as i32,
    };

    if diff.seconds < 0 {
        diff.seconds += 60;
        diff.minutes -= 1;
    }
    if diff.minutes < 0 {
        diff.minutes += 60;
        diff.hours -= 1;
    }
    if diff.hours < 0 {
        diff.hours += 24;
        diff.days -= 1;
    }
    if diff.days < 0 {
        diff.days += days_in_month(a.year(), a.month());
        diff.months -= 1;
    }
    if diff.months < 0 {
        diff.months += 12;
        diff.years -= 1;
    }
    diff
}

/// Human age of someone born on `birthday`: whole years, then `N mos.`
/// under a year, then `N days` under a month.
pub fn age_label(birthday: NaiveDate, now: NaiveDateTime) -> String {
    let diff = date_diff(birthday.and_time(chrono::NaiveTime::MIN), now);
    let elapsed_days = (now.date() - birthday).num_days().abs();

    if diff.years == 0 && (diff.months == 0 || elapsed_days <= 30) {
        format!("{} days", elapsed_days)
    } else if diff.years == 0 {
        format!("{} mos.", diff.months)
    } else {
        diff.years.to_string()
    }
}

/// `MM/YYYY`
pub fn month_year(date: NaiveDate) -> String {
    date.format("%m/%Y").to_string()
}

/// `MM/DD`
pub fn month_day(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// `Mon DD, YYYY`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `As of: MM/DD/YYYY`
pub fn as_of_stamp(date: NaiveDate) -> String {
    date.format("As of: %m/%d/%Y").to_string()
}
