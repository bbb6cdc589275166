//! Host clock-format preference.
//!
//! The dial defaults to the clock format of the user's locale. POSIX locale
//! variables are consulted in precedence order: `LC_ALL`, `LC_TIME`, `LANG`.

use std::env;

use tracing::debug;

/// Locale variables in the order the C library resolves `LC_TIME`.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Regions whose conventional short time format is 12-hour.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "US", "AU", "NZ", "PH", "IN", "PK", "BD", "EG", "SA", "JO", "MY", "CO", "SV", "HN", "NI",
];

/// Languages whose 12-hour convention also depends on the region.
const TWELVE_HOUR_LANGUAGE_REGIONS: &[(&str, &str)] = &[("en", "CA"), ("en", "IE")];

/// Returns whether the host environment prefers a 24-hour clock.
pub fn prefers_24_hour() -> bool {
    prefers_24_hour_with(|name| env::var(name).ok())
}

/// Returns whether the locale found through `lookup` prefers a 24-hour clock.
///
/// The first non-empty variable wins. Without any locale the dial uses
/// 24 hours.
pub fn prefers_24_hour_with(lookup: impl Fn(&str) -> Option<String>) -> bool {
    let locale = LOCALE_VARS
        .iter()
        .filter_map(|&var| lookup(var))
        .find(|value| !value.is_empty());
    let prefers = locale.as_deref().is_none_or(uses_24_hour_clock);
    debug!(?locale, prefers_24_hour = prefers, "resolved host clock format");
    prefers
}

/// Returns whether a POSIX locale name such as `en_US.UTF-8` uses a 24-hour
/// clock.
///
/// `C`, `POSIX` and unparseable names use 24 hours.
pub fn uses_24_hour_clock(locale: &str) -> bool {
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    let Some((language, region)) = name.split_once(['_', '-']) else {
        return true;
    };
    let region = region.to_ascii_uppercase();
    let language = language.to_ascii_lowercase();

    let twelve_hour = TWELVE_HOUR_REGIONS.contains(&region.as_str())
        || TWELVE_HOUR_LANGUAGE_REGIONS
            .iter()
            .any(|&(lang, reg)| lang == language && reg == region);
    !twelve_hour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_hour_locales() {
        assert!(!uses_24_hour_clock("en_US.UTF-8"));
        assert!(!uses_24_hour_clock("en_AU"));
        assert!(!uses_24_hour_clock("hi_IN.UTF-8"));
        assert!(!uses_24_hour_clock("en-CA"));
    }

    #[test]
    fn test_twenty_four_hour_locales() {
        assert!(uses_24_hour_clock("fi_FI.UTF-8"));
        assert!(uses_24_hour_clock("de_DE@euro"));
        assert!(uses_24_hour_clock("en_GB.UTF-8"));
        assert!(uses_24_hour_clock("fr_CA.UTF-8"));
    }

    fn locale_vars(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|&&(key, _)| key == name)
                .map(|&(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_lc_all_wins_over_lc_time_and_lang() {
        assert!(!prefers_24_hour_with(locale_vars(&[
            ("LC_ALL", "en_US.UTF-8"),
            ("LC_TIME", "de_DE.UTF-8"),
            ("LANG", "fr_FR.UTF-8"),
        ])));
        assert!(prefers_24_hour_with(locale_vars(&[
            ("LC_TIME", "de_DE.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ])));
    }

    #[test]
    fn test_empty_locale_vars_are_skipped() {
        assert!(!prefers_24_hour_with(locale_vars(&[
            ("LC_ALL", ""),
            ("LC_TIME", ""),
            ("LANG", "en_PH.UTF-8"),
        ])));
    }

    #[test]
    fn test_no_locale_uses_24_hours() {
        assert!(prefers_24_hour_with(locale_vars(&[])));
        assert!(prefers_24_hour_with(locale_vars(&[("LANG", "")])));
    }

    #[test]
    fn test_posix_locales_use_24_hours() {
        assert!(uses_24_hour_clock("C"));
        assert!(uses_24_hour_clock("POSIX"));
        assert!(uses_24_hour_clock("C.UTF-8"));
        assert!(uses_24_hour_clock(""));
    }
}
