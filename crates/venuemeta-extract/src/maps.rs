//! Coordinate extraction from consumer maps share URLs.
//!
//! Users paste whatever their maps app put on the clipboard, so the
//! extractor tries each known URL-parameter convention in a fixed
//! priority order and accepts the first bounds-valid pair. An
//! out-of-bounds pair falls through to the next pattern rather than
//! aborting.

use std::sync::LazyLock;

use regex::Regex;

use venuemeta_core::Coordinate;

/// A signed decimal, e.g. `26.2285` or `-50`.
const DECIMAL_PAIR: &str = r"(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)";

/// Extraction patterns in priority order. The viewport-center `@lat,lng`
/// convention is tried first, then the query-parameter conventions.
static COORD_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("at", format!("@{DECIMAL_PAIR}")),
        ("q", format!(r"[?&]q={DECIMAL_PAIR}")),
        ("query", format!(r"[?&]query={DECIMAL_PAIR}")),
        ("ll", format!(r"[?&]ll={DECIMAL_PAIR}")),
        ("destination", format!(r"[?&]destination={DECIMAL_PAIR}")),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(&pattern).expect("valid coordinate regex")))
    .collect()
});

/// Extracts a latitude/longitude pair from a maps share URL.
///
/// Tries each pattern in priority order; only the first syntactic match
/// per pattern is considered, and a match whose pair fails the
/// geographic bounds check falls through to the next pattern. Returns
/// `None` when nothing yields a valid pair. Never fails.
#[must_use]
pub fn extract_coordinates(url: &str) -> Option<Coordinate> {
    if url.is_empty() {
        return None;
    }

    for (name, pattern) in COORD_PATTERNS.iter() {
        let Some(caps) = pattern.captures(url) else {
            continue;
        };
        let (Ok(latitude), Ok(longitude)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>())
        else {
            continue;
        };
        if let Some(coordinate) = Coordinate::new(latitude, longitude) {
            tracing::debug!(
                pattern = name,
                latitude,
                longitude,
                "extracted coordinates from maps URL"
            );
            return Some(coordinate);
        }
    }

    None
}
