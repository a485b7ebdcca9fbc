//! Display locales for date formatting.
//!
//! A small, fixed set of locales keyed by string code. The table is
//! read-only static data; there is no mutable global state and no runtime
//! locale registration.

use chrono::{Datelike, NaiveDate};

/// Field ordering for long-form dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    /// `August 22, 2025`
    MonthDayYear,
    /// `22 août 2025`
    DayMonthYear,
}

/// A resolved display locale: month names plus date field ordering.
///
/// Obtain one from the static table via [`Locale::resolve`], or pass one of
/// the exported statics ([`EN_US`], [`FR`], [`NL`]) directly.
#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    code: &'static str,
    months: [&'static str; 12],
    order: DateOrder,
}

/// American English: `August 22, 2025`.
pub static EN_US: Locale = Locale {
    code: "en-US",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    order: DateOrder::MonthDayYear,
};

/// French: `22 août 2025`.
pub static FR: Locale = Locale {
    code: "fr",
    months: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    order: DateOrder::DayMonthYear,
};

/// Dutch: `22 augustus 2025`.
pub static NL: Locale = Locale {
    code: "nl",
    months: [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    order: DateOrder::DayMonthYear,
};

impl Locale {
    /// Look up a locale by string code.
    ///
    /// Codes are case-insensitive and accept `-` and `_` interchangeably:
    /// `en`, `en-US`, `en_us`, `fr`, `fr-FR`, `nl`, `nl_NL`, and so on.
    /// Unrecognized codes resolve to `None` — not an error; the formatter
    /// then falls back to its English default.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::date::Locale;
    ///
    /// assert!(Locale::resolve("fr-FR").is_some());
    /// assert!(Locale::resolve("EN_US").is_some());
    /// assert!(Locale::resolve("de").is_none());
    /// ```
    pub fn resolve(code: &str) -> Option<&'static Locale> {
        let normalized = code.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "en" | "en-us" => Some(&EN_US),
            "fr" | "fr-fr" => Some(&FR),
            "nl" | "nl-nl" => Some(&NL),
            _ => None,
        }
    }

    /// The BCP 47 style tag for this locale.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Render a calendar date in this locale's long form.
    pub(crate) fn format_long(&self, date: NaiveDate) -> String {
        let month = self.months[date.month0() as usize];
        match self.order {
            DateOrder::MonthDayYear => format!("{} {}, {}", month, date.day(), date.year()),
            DateOrder::DayMonthYear => format!("{} {} {}", date.day(), month, date.year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_codes() {
        assert_eq!(Locale::resolve("en"), Some(&EN_US));
        assert_eq!(Locale::resolve("en-US"), Some(&EN_US));
        assert_eq!(Locale::resolve("EN_us"), Some(&EN_US));
        assert_eq!(Locale::resolve("fr"), Some(&FR));
        assert_eq!(Locale::resolve("fr_FR"), Some(&FR));
        assert_eq!(Locale::resolve("nl-nl"), Some(&NL));
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        assert_eq!(Locale::resolve("de"), None);
        assert_eq!(Locale::resolve(""), None);
        assert_eq!(Locale::resolve("en-GB"), None);
    }

    #[test]
    fn test_format_long_english() {
        assert_eq!(EN_US.format_long(date(2025, 8, 22)), "August 22, 2025");
        assert_eq!(EN_US.format_long(date(2024, 1, 1)), "January 1, 2024");
    }

    #[test]
    fn test_format_long_day_first_locales() {
        assert_eq!(FR.format_long(date(2025, 8, 22)), "22 août 2025");
        assert_eq!(NL.format_long(date(2025, 8, 22)), "22 augustus 2025");
    }
}
