use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    consts::{JALALI_LOCALE, LOCALE_MAP, LOCALE_SEPARATOR},
    prelude::*,
};

/// Calendar a host date picker should run for its current locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "jalali")]
    Jalali,
}

impl CalendarSystem {
    /// Picks the calendar for a host locale identifier such as `fa_IR`.
    /// Only the Persian (Iran) locale switches to Jalali.
    pub fn for_locale(locale: &str) -> Self {
        let system = if locale == JALALI_LOCALE {
            Self::Jalali
        } else {
            Self::Gregorian
        };
        log::debug!("locale {locale:?} selects the {system} calendar");
        system
    }

    pub const fn is_jalali(self) -> bool {
        matches!(self, Self::Jalali)
    }
}

/// Maps a host locale identifier (`en_US`) to the date library's locale name (`en`).
///
/// Known identifiers use a fixed table; anything else keeps only the language
/// part before the first `_`.
pub fn parse_locale(locale: &str) -> &str {
    LOCALE_MAP
        .iter()
        .find(|(host, _)| *host == locale)
        .map_or_else(
            || {
                locale
                    .split_once(LOCALE_SEPARATOR)
                    .map_or(locale, |(language, _)| language)
            },
            |(_, mapped)| *mapped,
        )
}

/// Rewrites the ISO week token `Wo` to the locale week token `wo`.
///
/// Only the first occurrence is replaced.
pub fn normalize_week_format(format: &str) -> Cow<'_, str> {
    const ISO_WEEK: &str = "Wo";
    const LOCALE_WEEK: &str = "wo";

    if format.contains(ISO_WEEK) {
        Cow::Owned(format.replacen(ISO_WEEK, LOCALE_WEEK, 1))
    } else {
        Cow::Borrowed(format)
    }
}
