use chrono::NaiveDate;
use std::borrow::Cow;

/// Renders a `year-month-day` deadline as `dd/MM/yyyy`. Month and day may be
/// unpadded. Anything that does not parse as such a date is returned untouched.
pub fn format_deadline(deadline: &str) -> Cow<'_, str> {
    match NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
        Ok(date) => Cow::Owned(date.format("%d/%m/%Y").to_string()),
        Err(_) => Cow::Borrowed(deadline),
    }
}
