//! Date helpers shared by the pages and the show form.

use std::str::FromStr;

use thiserror::Error;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

/// How show times travel between the queries and the pages, e.g. `2019-05-21, 21:30:00`.
const SHOW_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day], [hour]:[minute]:[second]");

const FULL: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday] [month repr:long], [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
);

const MEDIUM: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month], [day], [year] [hour repr:12 padding:none]:[minute][period]"
);

/// Accepted input shapes, tried in order.
const INPUTS: &[&[BorrowedFormatItem<'static>]] = &[
    SHOW_TIME,
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown date format `{0}`, expected `full` or `medium`")]
    UnknownFormat(String),

    #[error("`{0}` is not a date and time")]
    Unparseable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Full,
    Medium,
}

impl FromStr for DateFormat {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(DateFormat::Full),
            "medium" => Ok(DateFormat::Medium),
            _ => Err(FilterError::UnknownFormat(s.to_owned())),
        }
    }
}

impl DateFormat {
    pub fn apply(self, date: PrimitiveDateTime) -> String {
        let description = match self {
            DateFormat::Full => FULL,
            DateFormat::Medium => MEDIUM,
        };
        date.format(description).unwrap_or_default()
    }
}

pub fn show_time(start_time: PrimitiveDateTime) -> String {
    start_time.format(SHOW_TIME).unwrap_or_default()
}

pub fn parse_timestamp(value: &str) -> Option<PrimitiveDateTime> {
    let value = value.trim();
    INPUTS.iter().find_map(|input| PrimitiveDateTime::parse(value, input).ok())
}

/// Renders a timestamp string for display with the `full` or `medium` layout.
pub fn datetime(value: &str, format: &str) -> Result<String, FilterError> {
    let format = format.parse::<DateFormat>()?;
    let date = parse_timestamp(value).ok_or_else(|| FilterError::Unparseable(value.to_owned()))?;
    Ok(format.apply(date))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn show_time_is_zero_padded_24_hour() {
        assert_eq!(show_time(datetime!(2019-05-21 21:30:00)), "2019-05-21, 21:30:00");
        assert_eq!(show_time(datetime!(2035-01-02 03:04:05)), "2035-01-02, 03:04:05");
    }

    #[test]
    fn full_and_medium_layouts() {
        assert_eq!(
            datetime("2019-05-21, 21:30:00", "full").unwrap(),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
        assert_eq!(
            datetime("2019-05-21, 21:30:00", "medium").unwrap(),
            "Tue 05, 21, 2019 9:30PM"
        );
        assert_eq!(
            datetime("2019-06-15T00:05", "medium").unwrap(),
            "Sat 06, 15, 2019 12:05AM"
        );
    }

    #[test]
    fn rejects_unknown_selector_and_garbage() {
        assert_eq!(
            datetime("2019-05-21, 21:30:00", "short"),
            Err(FilterError::UnknownFormat("short".to_owned()))
        );
        assert_eq!(
            datetime("next tuesday", "full"),
            Err(FilterError::Unparseable("next tuesday".to_owned()))
        );
    }

    #[test]
    fn parses_form_inputs() {
        let expected = datetime!(2030-07-04 20:00:00);
        assert_eq!(parse_timestamp("2030-07-04 20:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2030-07-04T20:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2030-07-04 20:00 "), Some(expected));
        assert_eq!(parse_timestamp("2030-13-04 20:00"), None);
    }
}
