//! Country classification from weak location signals.
//!
//! Maps a [`venuemeta_core::LocationSignal`] (URL, IANA timezone,
//! currency code — all optional) to one supported market country via
//! strict signal precedence: URL fragments beat timezone, timezone beats
//! currency. Classification is pure and total; "no match" is a normal
//! result, not an error.

pub mod classifier;

pub use classifier::GeoClassifier;
