//! Core domain types for venue metadata enrichment.
//!
//! Defines the country profile table (built-in or loaded from YAML with
//! load-time validation), the per-call [`LocationSignal`] input, and the
//! bounds-checked [`Coordinate`] output shared by the classification and
//! extraction crates.

pub mod countries;
pub mod error;
pub mod types;

pub use countries::{builtin_countries, load_countries, validate_countries, CountriesFile};
pub use error::ConfigError;
pub use types::{Coordinate, CountryProfile, LocationSignal};
