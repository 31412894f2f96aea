/// Number of months in a Jalali year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Largest zero-based month index (Esfand)
pub const MAX_MONTH: u8 = MONTHS_PER_YEAR - 1;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month length in the calendar
pub const MAX_DAY: u8 = FIRST_HALF_DAYS;

/// Zero-based index of Farvardin, the first month
pub const FARVARDIN: u8 = 0;
/// Zero-based index of Mehr, the first 30-day month
pub const MEHR: u8 = 6;
/// Zero-based index of Esfand, the last month
pub const ESFAND: u8 = 11;

/// Days in each of Farvardin through Shahrivar
pub const FIRST_HALF_DAYS: u8 = 31;
/// Days in each of Mehr through Bahman
pub const SECOND_HALF_DAYS: u8 = 30;
/// Days in Esfand for common years
pub const ESFAND_DAYS_COMMON: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Length of the leap cycle, in years
pub const LEAP_CYCLE: i32 = 33;

/// Positions within the 33-year cycle that are leap years
pub const LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Exact length of a fixed-format date string (`YYYY-MM-DD`)
pub const FIXED_DATE_LEN: usize = 10;

/// Locale accepted by the host that activates the Jalali calendar
pub const JALALI_LOCALE: &str = "fa_IR";

/// Host locale identifiers whose date-library names are not simply the language prefix
pub(crate) const LOCALE_MAP: [(&str, &str); 5] = [
    ("en_GB", "en-gb"),
    ("en_US", "en"),
    ("zh_CN", "zh-cn"),
    ("zh_TW", "zh-tw"),
    (JALALI_LOCALE, "fa"),
];

/// Separator between language and region in host locale identifiers
pub(crate) const LOCALE_SEPARATOR: char = '_';
