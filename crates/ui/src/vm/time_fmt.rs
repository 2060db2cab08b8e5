use chrono::NaiveDate;

/// Short month-first date, e.g. `1/15/2024`.
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%-m/%-d/%Y").to_string()
}
