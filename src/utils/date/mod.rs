// Date utility functions
// Calendar helpers for the availability grid headers and payload

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn add_days(date: NaiveDate, days: usize) -> NaiveDate {
    date + Duration::days(days as i64)
}

/// `YYYY-MM-DD`, the format the payload and the email use.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Abbreviated fr-FR weekday, as shown in the grid column headers.
pub fn short_weekday_fr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lun.",
        Weekday::Tue => "mar.",
        Weekday::Wed => "mer.",
        Weekday::Thu => "jeu.",
        Weekday::Fri => "ven.",
        Weekday::Sat => "sam.",
        Weekday::Sun => "dim.",
    }
}

pub fn day_number(date: NaiveDate) -> u32 {
    date.day()
}
