use crate::ParseError;
use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, ESFAND, ESFAND_DAYS_COMMON, ESFAND_DAYS_LEAP,
    FIRST_HALF_DAYS, LEAP_CYCLE, LEAP_REMAINDERS, MAX_DAY, MAX_MONTH, MEHR, MIN_DAY,
    MONTHS_PER_YEAR, SECOND_HALF_DAYS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Jalali year number. Any `i32` is accepted; year 0 and negative years
/// follow the same 33-year cycle as positive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct JalaliYear(i32);

impl JalaliYear {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether Esfand has 30 days in this year
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// Number of days in this year
    pub const fn days(self) -> u16 {
        days_in_year(self.0)
    }
}

impl From<i32> for JalaliYear {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<JalaliYear> for i32 {
    fn from(year: JalaliYear) -> Self {
        year.0
    }
}

impl fmt::Display for JalaliYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based month index guaranteed to be in the range `0..=MAX_MONTH` (0..=11).
///
/// `0` is Farvardin and `11` is Esfand. Conversions to and from `u8` use the
/// index; [`JalaliMonth::number`] and `Display` use the 1-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct JalaliMonth(u8);

impl JalaliMonth {
    /// Farvardin, the first month
    pub const FIRST: Self = Self(0);
    /// Esfand, the last month
    pub const LAST: Self = Self(MAX_MONTH);

    /// Creates a month from its zero-based index
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > `MAX_MONTH`.
    pub const fn new(index: u8) -> Result<Self, ParseError> {
        if index > MAX_MONTH {
            return Err(ParseError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Creates a month from its 1-based number, as written in `YYYY-MM-DD`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthNumber` if the number is 0 or > `MONTHS_PER_YEAR`.
    pub const fn from_number(number: u8) -> Result<Self, ParseError> {
        if number == 0 || number > MONTHS_PER_YEAR {
            return Err(ParseError::InvalidMonthNumber(number));
        }
        Ok(Self(number - 1))
    }

    /// Returns the zero-based index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub const fn is_last(self) -> bool {
        self.0 == ESFAND
    }

    /// Number of days in this month of `year`
    pub const fn days_in(self, year: JalaliYear) -> u8 {
        days_in_month(self.0, year.get())
    }

    /// The following month, or `None` after Esfand
    pub const fn succ(self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// The preceding month, or `None` before Farvardin
    pub const fn pred(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }
}

impl TryFrom<u8> for JalaliMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JalaliMonth> for u8 {
    fn from(month: JalaliMonth) -> Self {
        month.0
    }
}

impl fmt::Display for JalaliMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct JalaliDay(NonZeroU8);

impl JalaliDay {
    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: JalaliYear, month: JalaliMonth) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.number(),
            day: value,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > month.days_in(year) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Creates a day, clamping `value` into `1..=days_in(year)` for `month`
    pub(crate) fn clamped(value: u8, year: JalaliYear, month: JalaliMonth) -> Self {
        let value = value.clamp(MIN_DAY, month.days_in(year));
        NonZeroU8::new(value).map_or(Self::FIRST, Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for JalaliDay {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context, so only the absolute range is checked
        let invalid = ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        };
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<JalaliDay> for u8 {
    fn from(day: JalaliDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for JalaliDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar rules

/// Whether `year` is a Jalali leap year, using the 33-year cycle.
///
/// The remainder is Euclidean, so the rule repeats every 33 years for
/// negative years too.
pub const fn is_leap_year(year: i32) -> bool {
    let remainder = year.rem_euclid(LEAP_CYCLE);
    let mut i = 0;
    while i < LEAP_REMAINDERS.len() {
        if LEAP_REMAINDERS[i] == remainder {
            return true;
        }
        i += 1;
    }
    false
}

/// Number of days in the zero-based `month` of `year`.
///
/// `month` must be in `0..=11`. Larger values are a caller bug; they are
/// treated as Esfand in release builds.
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    debug_assert!(month < MONTHS_PER_YEAR);

    if month < MEHR {
        FIRST_HALF_DAYS
    } else if month < ESFAND {
        SECOND_HALF_DAYS
    } else if is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS_COMMON
    }
}

/// Number of days in `year`
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
