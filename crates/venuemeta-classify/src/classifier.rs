//! The [`GeoClassifier`] and its derived operations.

use std::sync::LazyLock;

use venuemeta_core::{builtin_countries, validate_countries, ConfigError, CountryProfile, LocationSignal};

static BUILTIN: LazyLock<GeoClassifier> = LazyLock::new(|| {
    GeoClassifier::new(builtin_countries().to_vec()).expect("built-in country table is valid")
});

/// Classifies location signals against a fixed, validated country table.
///
/// The table is immutable after construction, so a classifier can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct GeoClassifier {
    profiles: Vec<CountryProfile>,
}

impl GeoClassifier {
    /// Builds a classifier over the given profiles, rejecting tables
    /// that violate the profile invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the table is empty, contains duplicate
    /// names/ISO codes, or two profiles claim the same URL fragment.
    pub fn new(profiles: Vec<CountryProfile>) -> Result<Self, ConfigError> {
        validate_countries(&profiles)?;
        Ok(Self { profiles })
    }

    /// A process-lifetime classifier over the built-in market table.
    #[must_use]
    pub fn builtin() -> &'static GeoClassifier {
        &BUILTIN
    }

    /// The country table in classification order.
    #[must_use]
    pub fn profiles(&self) -> &[CountryProfile] {
        &self.profiles
    }

    /// Classifies a signal into at most one country.
    ///
    /// Precedence is signal-priority-outer, table-order-inner: the URL
    /// is checked against every country's fragments before timezone is
    /// considered at all, and timezone across every country before
    /// currency. Within a tier the first country in table order wins.
    /// The nesting order matters: a URL fragment match for a
    /// later-ordered country must beat a timezone match for an
    /// earlier-ordered one.
    ///
    /// Absent signal fields simply fail to match. Returns `None` when
    /// nothing matches; never fails.
    #[must_use]
    pub fn classify(&self, signal: &LocationSignal) -> Option<&CountryProfile> {
        let url = signal
            .url
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        if !url.is_empty() {
            for profile in &self.profiles {
                for fragment in &profile.url_fragments {
                    if url.contains(fragment.as_str()) {
                        tracing::debug!(
                            country = %profile.name,
                            %fragment,
                            "classified by URL fragment"
                        );
                        return Some(profile);
                    }
                }
            }
        }

        // Timezone and currency are exact, case-sensitive comparisons.
        if let Some(timezone) = signal.timezone.as_deref() {
            for profile in &self.profiles {
                if profile.timezone == timezone {
                    tracing::debug!(country = %profile.name, timezone, "classified by timezone");
                    return Some(profile);
                }
            }
        }

        if let Some(currency) = signal.currency_code.as_deref() {
            for profile in &self.profiles {
                if profile.currency_code == currency {
                    tracing::debug!(country = %profile.name, currency, "classified by currency");
                    return Some(profile);
                }
            }
        }

        None
    }

    /// Whether the signal classifies to the named country.
    #[must_use]
    pub fn is_country(&self, signal: &LocationSignal, name: &str) -> bool {
        self.classify(signal).is_some_and(|p| p.name == name)
    }

    /// All country names except the given one, in table order. Used to
    /// split a home market from international ones.
    #[must_use]
    pub fn countries_excluding(&self, name: &str) -> Vec<&str> {
        self.profiles
            .iter()
            .map(|p| p.name.as_str())
            .filter(|n| *n != name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(url: Option<&str>, timezone: Option<&str>, currency: Option<&str>) -> LocationSignal {
        LocationSignal {
            url: url.map(ToString::to_string),
            timezone: timezone.map(ToString::to_string),
            currency_code: currency.map(ToString::to_string),
        }
    }

    #[test]
    fn url_fragment_beats_timezone() {
        // URL points at Bahrain, timezone at UAE: URL wins.
        let result = GeoClassifier::builtin()
            .classify(&signal(
                Some("https://manama.platinumlist.net/event/123"),
                Some("Asia/Dubai"),
                None,
            ))
            .unwrap();
        assert_eq!(result.name, "Bahrain");
    }

    #[test]
    fn url_match_beats_earlier_country_timezone_match() {
        // UAE is later in table order than Bahrain; its URL fragment
        // must still win over Bahrain's timezone because the URL tier is
        // exhausted across all countries before timezone is consulted.
        let result = GeoClassifier::builtin()
            .classify(&signal(
                Some("https://dubai.platinumlist.net/event/9"),
                Some("Asia/Bahrain"),
                None,
            ))
            .unwrap();
        assert_eq!(result.name, "UAE");
    }

    #[test]
    fn timezone_match_without_url() {
        let result = GeoClassifier::builtin()
            .classify(&signal(None, Some("Asia/Dubai"), None))
            .unwrap();
        assert_eq!(result.name, "UAE");
    }

    #[test]
    fn timezone_beats_currency() {
        let result = GeoClassifier::builtin()
            .classify(&signal(None, Some("Asia/Qatar"), Some("BHD")))
            .unwrap();
        assert_eq!(result.name, "Qatar");
    }

    #[test]
    fn currency_match_as_last_resort() {
        let result = GeoClassifier::builtin()
            .classify(&signal(None, None, Some("KWD")))
            .unwrap();
        assert_eq!(result.name, "Kuwait");
    }

    #[test]
    fn empty_signal_is_no_match() {
        assert!(GeoClassifier::builtin()
            .classify(&LocationSignal::default())
            .is_none());
    }

    #[test]
    fn empty_string_fields_are_no_match() {
        assert!(GeoClassifier::builtin()
            .classify(&signal(Some(""), Some(""), Some("")))
            .is_none());
    }

    #[test]
    fn unknown_values_are_no_match() {
        assert!(GeoClassifier::builtin()
            .classify(&signal(
                Some("https://example.com/somewhere"),
                Some("Europe/London"),
                Some("GBP"),
            ))
            .is_none());
    }

    #[test]
    fn url_matching_is_case_insensitive() {
        let result = GeoClassifier::builtin()
            .classify(&signal(Some("https://BAHRAIN.example.com"), None, None))
            .unwrap();
        assert_eq!(result.name, "Bahrain");
    }

    #[test]
    fn timezone_matching_is_case_sensitive() {
        assert!(GeoClassifier::builtin()
            .classify(&signal(None, Some("asia/dubai"), None))
            .is_none());
    }

    #[test]
    fn table_order_breaks_ties_within_a_tier() {
        // A URL containing fragments of two countries resolves to the
        // earlier table entry (Bahrain before UAE).
        let result = GeoClassifier::builtin()
            .classify(&signal(Some("https://bahrain-dubai.example.com"), None, None))
            .unwrap();
        assert_eq!(result.name, "Bahrain");
    }

    #[test]
    fn classify_is_deterministic() {
        let s = signal(Some("https://doha.example.com"), Some("Asia/Riyadh"), Some("OMR"));
        let classifier = GeoClassifier::builtin();
        let first = classifier.classify(&s).map(|p| p.name.clone());
        let second = classifier.classify(&s).map(|p| p.name.clone());
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("Qatar"));
    }

    #[test]
    fn is_country_true_on_match() {
        let classifier = GeoClassifier::builtin();
        assert!(classifier.is_country(&signal(None, Some("Asia/Bahrain"), None), "Bahrain"));
        assert!(!classifier.is_country(&signal(None, Some("Asia/Bahrain"), None), "UAE"));
        assert!(!classifier.is_country(&LocationSignal::default(), "Bahrain"));
    }

    #[test]
    fn countries_excluding_preserves_order() {
        let names = GeoClassifier::builtin().countries_excluding("Bahrain");
        assert_eq!(
            names,
            vec!["UAE", "Saudi Arabia", "Qatar", "Kuwait", "Oman", "Egypt"]
        );
    }

    #[test]
    fn countries_excluding_unknown_name_returns_all() {
        let names = GeoClassifier::builtin().countries_excluding("Atlantis");
        assert_eq!(names.len(), GeoClassifier::builtin().profiles().len());
    }

    #[test]
    fn new_rejects_invalid_table() {
        assert!(GeoClassifier::new(vec![]).is_err());
    }
}
