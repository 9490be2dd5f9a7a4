use thiserror::Error;

/// Errors raised while loading or validating a country profile table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read countries file {path}: {source}")]
    CountriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse countries file: {0}")]
    CountriesFileParse(#[from] serde_yaml::Error),

    #[error("country table is empty")]
    EmptyCountryTable,

    #[error("duplicate country name: {0}")]
    DuplicateCountryName(String),

    #[error("duplicate ISO code {code} (countries {first} and {second})")]
    DuplicateIsoCode {
        code: String,
        first: String,
        second: String,
    },

    #[error("URL fragment {fragment:?} is claimed by both {first} and {second}")]
    DuplicateUrlFragment {
        fragment: String,
        first: String,
        second: String,
    },

    #[error("country {country} has invalid URL fragment {fragment:?} (must be non-empty lowercase)")]
    InvalidUrlFragment { country: String, fragment: String },

    #[error("country {0} has no URL fragments")]
    NoUrlFragments(String),

    #[error("country {0} has no cities")]
    NoCities(String),

    #[error("country {country} has invalid ISO code {code:?} (expected two ASCII letters)")]
    InvalidIsoCode { country: String, code: String },

    #[error("country {country} has invalid currency code {code:?} (expected three ASCII letters)")]
    InvalidCurrencyCode { country: String, code: String },
}
