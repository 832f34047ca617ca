//! Locale preference for localized labels and descriptions.
//!
//! Profiles carry the same label in several locales. French wins, English
//! is the second choice, and depending on the dialect any other locale may
//! be used when nothing better has been seen.

/// Preference rank of a locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocaleRank {
    Other,
    English,
    French,
}

impl LocaleRank {
    pub fn of(locale: Option<&str>) -> Self {
        match locale {
            Some("fr_FR" | "fr") => LocaleRank::French,
            Some("en_US" | "en") => LocaleRank::English,
            _ => LocaleRank::Other,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LocaleRank::Other)
    }
}

/// What to do with candidates in locales other than French or English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFallback {
    /// Take the first such candidate while no winner is set.
    FirstSeen,
    /// Ignore them.
    None,
}

/// Pick the winning value among `(locale, value)` candidates in one pass.
///
/// A French candidate always replaces the current winner. An English
/// candidate, or with [`LocaleFallback::FirstSeen`] any other candidate, is
/// only taken while the winner is unset or blank.
pub fn pick_by_locale<'a, T, I, F>(candidates: I, fallback: LocaleFallback, is_blank: F) -> Option<T>
where
    I: IntoIterator<Item = (Option<&'a str>, T)>,
    F: Fn(&T) -> bool,
{
    let mut winner: Option<T> = None;
    for (locale, value) in candidates {
        let unset = winner.as_ref().is_none_or(&is_blank);
        match LocaleRank::of(locale) {
            LocaleRank::French => winner = Some(value),
            LocaleRank::English if unset => winner = Some(value),
            LocaleRank::Other if unset && fallback == LocaleFallback::FirstSeen => {
                winner = Some(value);
            }
            _ => {}
        }
    }
    winner
}

/// Resolve one text slot, returning an empty string when nothing qualifies.
pub fn resolve_text<'a, I>(candidates: I, fallback: LocaleFallback) -> String
where
    I: IntoIterator<Item = (Option<&'a str>, String)>,
{
    pick_by_locale(candidates, fallback, String::is_empty).unwrap_or_default()
}

/// First non-empty text among French or English candidates, in document
/// order. Other locales are ignored.
pub fn first_known_text<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = (Option<&'a str>, String)>,
{
    candidates
        .into_iter()
        .find(|(locale, text)| LocaleRank::of(*locale).is_known() && !text.is_empty())
        .map(|(_, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<'a>(items: &[(&'a str, &str)]) -> Vec<(Option<&'a str>, String)> {
        items
            .iter()
            .map(|(locale, text)| (Some(*locale), (*text).to_string()))
            .collect()
    }

    #[test]
    fn french_beats_earlier_english() {
        let winner = resolve_text(pairs(&[("en", "A"), ("fr", "B")]), LocaleFallback::FirstSeen);
        assert_eq!(winner, "B");
    }

    #[test]
    fn unknown_locale_used_as_fallback() {
        let winner = resolve_text(pairs(&[("de", "C")]), LocaleFallback::FirstSeen);
        assert_eq!(winner, "C");
    }

    #[test]
    fn english_kept_over_later_unknown() {
        let winner = resolve_text(pairs(&[("en", "A"), ("de", "C")]), LocaleFallback::FirstSeen);
        assert_eq!(winner, "A");
    }

    #[test]
    fn first_seen_is_not_replaced_by_english() {
        let winner = resolve_text(pairs(&[("de", "C"), ("en_US", "A")]), LocaleFallback::FirstSeen);
        assert_eq!(winner, "C");
    }

    #[test]
    fn french_regional_tag() {
        let winner = resolve_text(
            pairs(&[("en_US", "Title"), ("fr_FR", "Titre"), ("en", "Other")]),
            LocaleFallback::FirstSeen,
        );
        assert_eq!(winner, "Titre");
    }

    #[test]
    fn blank_winner_can_be_filled() {
        let winner = resolve_text(pairs(&[("en", ""), ("de", "C")]), LocaleFallback::FirstSeen);
        assert_eq!(winner, "C");
    }

    #[test]
    fn no_fallback_ignores_unknown_locales() {
        let winner = resolve_text(pairs(&[("de", "C"), ("it", "D")]), LocaleFallback::None);
        assert_eq!(winner, "");
        let winner = resolve_text(pairs(&[("de", "C"), ("en", "A")]), LocaleFallback::None);
        assert_eq!(winner, "A");
    }

    #[test]
    fn missing_locale_attribute_is_other() {
        assert_eq!(LocaleRank::of(None), LocaleRank::Other);
        let winner = resolve_text(vec![(None, "X".to_string())], LocaleFallback::FirstSeen);
        assert_eq!(winner, "X");
    }

    #[test]
    fn first_known_text_skips_empty_and_unknown() {
        let found = first_known_text(pairs(&[("de", "C"), ("en", ""), ("fr", "B"), ("en", "A")]));
        assert_eq!(found.as_deref(), Some("B"));
        assert_eq!(first_known_text(pairs(&[("de", "C")])), None);
    }
}
