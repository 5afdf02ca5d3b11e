use chrono::{Local, NaiveDate};

/// Today's date in the host's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Long-form calendar date, e.g. "June 1, 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
