use std::str::FromStr;

use crate::{
    DATE_SEPARATOR, FIXED_DATE_LEN, MIN_DAY, ParseError,
    prelude::*,
    types::{JalaliDay, JalaliMonth, JalaliYear},
};

/// A complete Jalali calendar date.
/// Ordering is chronological: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.number()", "day.get()")]
pub struct JalaliDate {
    year:  JalaliYear,
    month: JalaliMonth,
    day:   JalaliDay,
}

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Empty input string.
    #[error("Empty date string")]
    EmptyInput,

    /// Input is not in `YYYY-MM-DD` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// A component is out of range.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl JalaliDate {
    /// Creates a date from already-validated year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in the month.
    pub fn new(year: JalaliYear, month: JalaliMonth, day: u8) -> Result<Self, ParseError> {
        let day = JalaliDay::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw components, with the 1-based month number as
    /// written in `YYYY-MM-DD`
    ///
    /// # Errors
    /// Returns `ParseError` if the month number or day is out of range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::new(year.into(), JalaliMonth::from_number(month)?, day)
    }

    pub const fn year(&self) -> JalaliYear {
        self.year
    }

    pub const fn month(&self) -> JalaliMonth {
        self.month
    }

    pub const fn day(&self) -> JalaliDay {
        self.day
    }

    /// Whether this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        self.month.days_in(self.year)
    }

    /// First day of this date's month
    pub fn start_of_month(&self) -> Self {
        self.with_day(MIN_DAY)
    }

    /// Last day of this date's month
    pub fn end_of_month(&self) -> Self {
        self.with_day(self.days_in_month())
    }

    /// 1-based position of this date within its year
    pub fn day_of_year(&self) -> u16 {
        let preceding: u16 = (0..self.month.index())
            .map(|m| u16::from(crate::days_in_month(m, self.year.get())))
            .sum();
        preceding + u16::from(self.day.get())
    }

    /// The following day, rolling over month and year ends.
    /// Returns `None` past the last representable year.
    pub fn next_day(&self) -> Option<Self> {
        if self.day.get() < self.days_in_month() {
            return Some(self.with_day(self.day.get() + 1));
        }
        match self.month.succ() {
            Some(month) => Some(Self::first_of(self.year, month)),
            None => {
                let year = self.year.get().checked_add(1)?;
                Some(Self::first_of(year.into(), JalaliMonth::FIRST))
            }
        }
    }

    /// The preceding day, rolling back over month and year starts.
    /// Returns `None` before the first representable year.
    pub fn prev_day(&self) -> Option<Self> {
        if self.day.get() > MIN_DAY {
            return Some(self.with_day(self.day.get() - 1));
        }
        let (year, month) = match self.month.pred() {
            Some(month) => (self.year, month),
            None => (self.year.get().checked_sub(1)?.into(), JalaliMonth::LAST),
        };
        Some(Self::first_of(year, month).with_day(month.days_in(year)))
    }

    const fn first_of(year: JalaliYear, month: JalaliMonth) -> Self {
        Self {
            year,
            month,
            day: JalaliDay::FIRST,
        }
    }

    /// Same year and month with a different day, clamped to the month length
    fn with_day(&self, day: u8) -> Self {
        Self {
            day: JalaliDay::clamped(day, self.year, self.month),
            ..*self
        }
    }

    /// Parses an unsigned run of ASCII digits; no sign, no padding
    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Whether `text` is exactly `DDDD-DD-DD`
    fn has_fixed_shape(text: &str) -> bool {
        let bytes = text.as_bytes();
        bytes.len() == FIXED_DATE_LEN
            && bytes.iter().enumerate().all(|(i, &b)| match i {
                4 | 7 => char::from(b) == DATE_SEPARATOR,
                _ => b.is_ascii_digit(),
            })
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // A leading separator is a minus sign on the year
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            )));
        };

        let magnitude: u32 = Self::parse_component(year)?;
        let year = if negative {
            0i32.checked_sub_unsigned(magnitude)
        } else {
            i32::try_from(magnitude).ok()
        }
        .ok_or_else(|| DateError::InvalidFormat((*year).to_owned()))?;
        let month: u8 = Self::parse_component(month)?;
        let day: u8 = Self::parse_component(day)?;

        Ok(Self::from_ymd(year, month, day)?)
    }
}

/// Lenient parse of a fixed-length `YYYY-MM-DD` string.
///
/// Text that is not exactly [`FIXED_DATE_LEN`] characters is rejected
/// silently. Text of the right length that is not a valid zero-padded
/// date logs a warning.
pub fn parse_fixed(text: &str) -> Option<JalaliDate> {
    if text.chars().count() != FIXED_DATE_LEN {
        return None;
    }
    if !JalaliDate::has_fixed_shape(text) {
        log::warn!(
            "no date format matched {text:?}: expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD"
        );
        return None;
    }
    match text.parse() {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("no date format matched {text:?}: {err}");
            None
        }
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
