//! Domain types shared by the classification and extraction crates.

use serde::{Deserialize, Serialize};

/// One supported market country and the signals that identify it.
///
/// Profiles are created once (built-in table or YAML load) and never
/// mutated afterwards. The table order they appear in is part of the
/// classification contract: earlier profiles win ties within a signal
/// tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProfile {
    /// Display name, e.g. "Bahrain".
    pub name: String,
    /// Two-letter country code, e.g. "BH".
    pub iso_code: String,
    /// Three-letter ISO currency code, e.g. "BHD".
    pub currency_code: String,
    /// Canonical IANA timezone identifier, e.g. "Asia/Bahrain".
    pub timezone: String,
    /// Lowercase substrings; a URL containing any one identifies this
    /// country. Fragment order is respected during matching.
    pub url_fragments: Vec<String>,
    /// City names in display order; the first is the default city.
    pub cities: Vec<String>,
}

impl CountryProfile {
    /// The country's default city (first entry of the city list).
    ///
    /// Validation guarantees at least one city, but this stays total and
    /// returns an empty string for a hand-built profile with none.
    #[must_use]
    pub fn default_city(&self) -> &str {
        self.cities.first().map_or("", String::as_str)
    }
}

/// Weak, independently-optional evidence about where an event or venue
/// is located. Built fresh per classification call; absent fields simply
/// fail to match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSignal {
    /// Any URL associated with the record (event page, ticket link).
    pub url: Option<String>,
    /// IANA timezone name as reported by the source API.
    pub timezone: Option<String>,
    /// Three-letter currency code as reported by the source API.
    pub currency_code: Option<String>,
}

impl LocationSignal {
    /// Convenience constructor for the common URL-only case.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// A validated geographic coordinate pair.
///
/// Only constructible through [`Coordinate::new`], so every value in
/// circulation satisfies the latitude/longitude bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate if `latitude` is within `[-90, 90]` and
    /// `longitude` within `[-180, 180]`; `None` otherwise (including
    /// NaN, which fails both comparisons).
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
