//! Jalali (Persian solar) calendar rules for date-picker adapters.
//!
//! The core is two pure functions, [`is_leap_year`] and [`days_in_month`],
//! built on the 33-year leap cycle. [`JalaliDate`] and the [`locale`] helpers
//! cover the small amount of glue an adapter needs around them.
//!
//! ```
//! use jalali_calendar::{days_in_month, is_leap_year};
//!
//! assert!(is_leap_year(1403));
//! assert_eq!(days_in_month(11, 1403), 30);
//! assert_eq!(days_in_month(11, 1404), 29);
//! ```

mod consts;
mod date;
pub mod locale;
mod prelude;
mod types;

pub use consts::*;
pub use date::{DateError, JalaliDate, parse_fixed};
pub use locale::{CalendarSystem, normalize_week_format, parse_locale};
pub use types::{
    JalaliDay, JalaliMonth, JalaliYear, days_in_month, days_in_year, is_leap_year,
};

use crate::prelude::*;

/// Out-of-range date component.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonthNumber(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_fixtures() {
        assert!(is_leap_year(1403));
        assert!(!is_leap_year(1404));
    }

    #[test]
    fn test_esfand_fixtures() {
        assert_eq!(days_in_month(11, 1403), 30);
        assert_eq!(days_in_month(11, 1404), 29);
    }

    #[test]
    fn test_date_helpers_agree_with_rules() {
        let esfand_1403 = "1403-12-01".parse::<JalaliDate>().unwrap();
        assert_eq!(esfand_1403.is_leap_year(), is_leap_year(1403));
        assert_eq!(esfand_1403.days_in_month(), days_in_month(ESFAND, 1403));

        let first_1404 = esfand_1403.end_of_month().next_day().unwrap();
        assert_eq!(first_1404.to_string(), "1404-01-01");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::InvalidMonth(12).to_string(),
            "Invalid month index: 12 (must be 0-11)"
        );
        assert_eq!(
            ParseError::InvalidMonthNumber(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year: 1404,
                month: 12,
                day: 30
            }
            .to_string(),
            "Invalid day 30 for month 1404-12"
        );
    }

    #[test]
    fn test_error_converts_into_date_error() {
        let err: DateError = ParseError::InvalidMonthNumber(0).into();
        assert!(matches!(
            err,
            DateError::Parse(ParseError::InvalidMonthNumber(0))
        ));
        assert_eq!(err.to_string(), "Invalid month: 0 (must be 1-12)");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MONTHS_PER_YEAR, 12);
        assert_eq!(LEAP_CYCLE, 33);
        assert_eq!(LEAP_REMAINDERS.len(), 8);
    }
}
