//! The supported-market country table: built-in defaults, YAML loading,
//! and load-time validation.
//!
//! Table order is part of the classification contract (earlier profiles
//! win ties within a signal tier), so both the built-in table and loaded
//! files preserve their declared order. Bahrain is the home market and
//! comes first.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::CountryProfile;

/// Top-level shape of a `countries.yaml` file.
#[derive(Debug, Deserialize)]
pub struct CountriesFile {
    pub countries: Vec<CountryProfile>,
}

static BUILTIN: LazyLock<Vec<CountryProfile>> = LazyLock::new(|| {
    let table = vec![
        profile(
            "Bahrain",
            "BH",
            "BHD",
            "Asia/Bahrain",
            &["bahrain", "manama.platinumlist"],
            &["Manama", "Riffa", "Muharraq"],
        ),
        profile(
            "UAE",
            "AE",
            "AED",
            "Asia/Dubai",
            &["uae", "dubai", "abu-dhabi", "abudhabi", "sharjah"],
            &["Dubai", "Abu Dhabi", "Sharjah"],
        ),
        profile(
            "Saudi Arabia",
            "SA",
            "SAR",
            "Asia/Riyadh",
            &["saudi", "ksa", "riyadh", "jeddah"],
            &["Riyadh", "Jeddah", "Dammam"],
        ),
        profile(
            "Qatar",
            "QA",
            "QAR",
            "Asia/Qatar",
            &["qatar", "doha"],
            &["Doha", "Al Rayyan"],
        ),
        profile(
            "Kuwait",
            "KW",
            "KWD",
            "Asia/Kuwait",
            &["kuwait"],
            &["Kuwait City", "Hawally"],
        ),
        profile(
            "Oman",
            "OM",
            "OMR",
            "Asia/Muscat",
            &["oman", "muscat"],
            &["Muscat", "Salalah"],
        ),
        profile(
            "Egypt",
            "EG",
            "EGP",
            "Africa/Cairo",
            &["egypt", "cairo", "elgouna"],
            &["Cairo", "Alexandria", "El Gouna"],
        ),
    ];
    validate_countries(&table).expect("built-in country table is valid");
    table
});

fn profile(
    name: &str,
    iso_code: &str,
    currency_code: &str,
    timezone: &str,
    url_fragments: &[&str],
    cities: &[&str],
) -> CountryProfile {
    CountryProfile {
        name: name.to_string(),
        iso_code: iso_code.to_string(),
        currency_code: currency_code.to_string(),
        timezone: timezone.to_string(),
        url_fragments: url_fragments.iter().map(ToString::to_string).collect(),
        cities: cities.iter().map(ToString::to_string).collect(),
    }
}

/// The built-in country table, validated once at first access.
#[must_use]
pub fn builtin_countries() -> &'static [CountryProfile] {
    &BUILTIN
}

/// Load and validate a country table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_countries(path: &Path) -> Result<Vec<CountryProfile>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CountriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CountriesFile = serde_yaml::from_str(&content)?;
    validate_countries(&file.countries)?;
    tracing::debug!(
        path = %path.display(),
        count = file.countries.len(),
        "loaded country table"
    );
    Ok(file.countries)
}

/// Validate a country table against the profile invariants.
///
/// Checks, in order: table is non-empty; every profile has a two-letter
/// ISO code, a three-letter currency code, at least one URL fragment and
/// at least one city; fragments are non-empty and lowercase (they are
/// matched verbatim against a lowercased URL); no duplicate name or ISO
/// code; and no URL fragment is claimed by two profiles (which would
/// make classification ambiguous).
///
/// # Errors
///
/// Returns the first `ConfigError` encountered.
pub fn validate_countries(countries: &[CountryProfile]) -> Result<(), ConfigError> {
    if countries.is_empty() {
        return Err(ConfigError::EmptyCountryTable);
    }

    let mut names: HashMap<&str, &str> = HashMap::new();
    let mut iso_codes: HashMap<&str, &str> = HashMap::new();
    let mut fragments: HashMap<&str, &str> = HashMap::new();

    for country in countries {
        if country.iso_code.len() != 2 || !country.iso_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigError::InvalidIsoCode {
                country: country.name.clone(),
                code: country.iso_code.clone(),
            });
        }
        if country.currency_code.len() != 3
            || !country.currency_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigError::InvalidCurrencyCode {
                country: country.name.clone(),
                code: country.currency_code.clone(),
            });
        }
        if country.url_fragments.is_empty() {
            return Err(ConfigError::NoUrlFragments(country.name.clone()));
        }
        if country.cities.is_empty() {
            return Err(ConfigError::NoCities(country.name.clone()));
        }

        if let Some(first) = names.insert(&country.name, &country.name) {
            return Err(ConfigError::DuplicateCountryName(first.to_string()));
        }
        if let Some(first) = iso_codes.insert(&country.iso_code, &country.name) {
            return Err(ConfigError::DuplicateIsoCode {
                code: country.iso_code.clone(),
                first: first.to_string(),
                second: country.name.clone(),
            });
        }

        for fragment in &country.url_fragments {
            if fragment.is_empty() || *fragment != fragment.to_lowercase() {
                return Err(ConfigError::InvalidUrlFragment {
                    country: country.name.clone(),
                    fragment: fragment.clone(),
                });
            }
            if let Some(first) = fragments.insert(fragment, &country.name) {
                return Err(ConfigError::DuplicateUrlFragment {
                    fragment: fragment.clone(),
                    first: first.to_string(),
                    second: country.name.clone(),
                });
            }
        }
    }

    Ok(())
}
